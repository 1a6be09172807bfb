use stackhook_core::KNOWN_SCALING_PROCESSES;

use crate::OutputFormat;

pub fn run(format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(KNOWN_SCALING_PROCESSES)?);
        }
        OutputFormat::Text => {
            println!("{} scaling processes:", KNOWN_SCALING_PROCESSES.len());
            for process in KNOWN_SCALING_PROCESSES {
                println!("  {process}");
            }
        }
    }
    Ok(())
}
