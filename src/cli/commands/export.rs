use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let filter = filter.to_filter()?;
        let pool = open_pool(cfg)?;
        ExportLogic::export(&pool, *format, &expand_tilde(file), filter, *force)?;
    }
    Ok(())
}
