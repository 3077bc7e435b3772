//! Rendering planned jobs, sequentially or on a rayon pool, into a sink.

use rayon::prelude::*;

use crate::assets::store::PreparedCampaign;
use crate::campaign::Campaign;
use crate::export::editor::EditorItem;
use crate::export::sink::CreativeSink;
use crate::foundation::error::{AdError, AdResult};
use crate::plan::CreativeJob;
use crate::render::overlay::{Creative, CreativeRenderer};

/// How a [`BatchRunner`] schedules jobs.
#[derive(Clone, Debug)]
pub struct BatchOpts {
    /// Render on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Jobs rendered before their results are handed to the sink.
    pub chunk_size: usize,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for BatchOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 32,
            threads: None,
        }
    }
}

/// Counters reported by [`BatchRunner::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Jobs handed to the runner.
    pub planned: usize,
    /// Creatives pushed to the sink.
    pub rendered: usize,
}

/// Renders jobs of one campaign; assets are decoded once in [`BatchRunner::new`].
pub struct BatchRunner {
    prepared: PreparedCampaign,
    opts: BatchOpts,
}

impl BatchRunner {
    /// Runner with default options (sequential).
    pub fn new(campaign: &Campaign) -> AdResult<Self> {
        Self::with_opts(campaign, BatchOpts::default())
    }

    /// Validate the campaign and options, then prepare assets.
    pub fn with_opts(campaign: &Campaign, opts: BatchOpts) -> AdResult<Self> {
        if let Some(n) = opts.threads
            && n == 0
        {
            return Err(AdError::validation(
                "batch 'threads' must be >= 1 when set",
            ));
        }
        campaign.validate()?;
        Ok(Self {
            prepared: PreparedCampaign::prepare(campaign)?,
            opts,
        })
    }

    /// Render every job and push results to `sink` in plan order.
    #[tracing::instrument(skip_all, fields(jobs = jobs.len(), parallel = self.opts.parallel))]
    pub fn run(&self, jobs: &[CreativeJob], sink: &mut dyn CreativeSink) -> AdResult<BatchStats> {
        sink.begin(jobs.len())?;
        let mut stats = BatchStats {
            planned: jobs.len(),
            rendered: 0,
        };

        if self.opts.parallel && jobs.len() > 1 {
            let pool = build_thread_pool(self.opts.threads)?;
            let chunk = self.opts.chunk_size.max(1);
            for part in jobs.chunks(chunk) {
                for creative in self.render_parallel(&pool, part)? {
                    sink.push(&creative)?;
                    stats.rendered += 1;
                }
            }
        } else {
            let mut renderer = CreativeRenderer::new(&self.prepared)?;
            for job in jobs {
                let creative = renderer.render(job, &self.prepared)?;
                sink.push(&creative)?;
                stats.rendered += 1;
            }
        }

        sink.end()?;
        tracing::info!(
            planned = stats.planned,
            rendered = stats.rendered,
            "batch finished"
        );
        Ok(stats)
    }

    fn render_parallel(
        &self,
        pool: &rayon::ThreadPool,
        jobs: &[CreativeJob],
    ) -> AdResult<Vec<Creative>> {
        let prepared = &self.prepared;
        let rendered = pool.install(|| {
            jobs.par_iter()
                .map_init(
                    || CreativeRenderer::new(prepared),
                    |worker, job| -> AdResult<Creative> {
                        let renderer = worker.as_mut().map_err(|e| {
                            AdError::render(format!("failed to start render worker: {e}"))
                        })?;
                        renderer.render(job, prepared)
                    },
                )
                .collect::<Vec<_>>()
        });
        rendered.into_iter().collect()
    }

    /// Editor inputs: clean resized bases with the geometry each job would be drawn with.
    pub fn editor_items(&self, jobs: &[CreativeJob]) -> AdResult<Vec<EditorItem>> {
        let mut renderer = CreativeRenderer::new(&self.prepared)?;
        jobs.iter()
            .map(|job| {
                Ok(EditorItem {
                    file_name: job.file_name.clone(),
                    layers: renderer.layers(job, &self.prepared)?,
                })
            })
            .collect()
    }
}

fn build_thread_pool(threads: Option<usize>) -> AdResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AdError::render(format!("failed to build rayon thread pool: {e}")))
}
