use stackhook_hooks::HookRegistry;

use crate::OutputFormat;

pub fn run(format: &OutputFormat) -> anyhow::Result<()> {
    let registry = HookRegistry::with_builtin_hooks();
    let names = registry.names();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Text => {
            println!("{} hooks:", names.len());
            for name in names {
                println!("  {name}");
            }
        }
    }
    Ok(())
}
