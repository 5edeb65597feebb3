use anyhow::Result;

use crate::model::{ClientConfig, Location};

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: ClientConfig,
    pub location: Location,
    pub linear: bool,
}

pub fn run_with_options(runtime: &tokio::runtime::Runtime, opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(runtime, opts)
}
