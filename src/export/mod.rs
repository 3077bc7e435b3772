pub(crate) mod data_uri;
pub(crate) mod editor;
pub(crate) mod gallery;
pub(crate) mod html;
pub(crate) mod sink;
