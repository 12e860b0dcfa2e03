pub mod models;
pub mod error;
pub mod config;
pub mod backend;
pub mod state;
pub mod registry;
pub mod analysis;
pub mod upload;
pub mod documents;
pub mod detail;
pub mod answer;
pub mod forms;

pub use models::*;
pub use error::{ClientError, ClientResult};
pub use config::ClientConfig;
pub use backend::{Backend, HttpBackend};
pub use state::{ActionState, StatusBoard};
pub use registry::DocumentRegistry;
pub use analysis::BatchAnalysis;
pub use upload::UploadFlow;
pub use documents::DocumentList;
pub use detail::DocumentDetail;
pub use answer::parse_answer;
pub use forms::{QaForm, SearchForm, TranslateForm};
