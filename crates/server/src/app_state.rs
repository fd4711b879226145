use std::{path::PathBuf, time::Duration};

use crate::templates::Templates;

pub(crate) struct AppState {
    pub(crate) templates: Templates,
    pub(crate) static_dir: PathBuf,
    pub(crate) request_timeout: Duration,
}
