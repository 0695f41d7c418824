//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;

use super::transaction::HistoryArgs;
use crate::error::TrackerResult;
use crate::export::export_transactions_csv;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: HistoryArgs,
}

/// Handle `export`
pub fn handle_export(storage: &Storage, args: ExportArgs) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let transactions = service.list()?;
    let filter = args.filter.to_filter(&transactions)?;
    let view = service.history(&filter)?;
    let rows = view.transactions();

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            export_transactions_csv(rows, BufWriter::new(file))?;
            println!("Exported {} transaction(s) to: {}", rows.len(), path.display());
        }
        None => export_transactions_csv(rows, io::stdout().lock())?,
    }

    Ok(())
}
