//! Web client: the upload form's state machine and the HTTP calls it makes.

pub mod api;
pub mod file;
pub mod form;

pub use api::ApiClient;
pub use file::SelectedFile;
pub use form::UploadForm;
