use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

use taskps_core::{
    FormatWriter, IdResolver, RenderContext, ResolveContext, default_format, new_task_format,
    print,
};

use crate::cli::PsArgs;
use crate::config::{ConfigSearch, load_config};
use crate::snapshot::Snapshot;
use crate::utils::TaskFilter;
use crate::utils::filter::apply_filters;

pub fn ps_command(args: &PsArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ps_to(args, &ConfigSearch::from_env(args.config.as_deref()), &mut out)
}

/// Run `ps`, writing the listing to `out`
pub fn ps_to(args: &PsArgs, search: &ConfigSearch, out: &mut dyn Write) -> Result<()> {
    let filters = args
        .filters
        .iter()
        .map(|f| TaskFilter::parse(f))
        .collect::<Result<Vec<_>>>()?;

    let format = match &args.format {
        Some(format) => format.clone(),
        None => {
            let (_, config) = load_config(search)?;
            default_format(&config, args.quiet).to_string()
        }
    };
    debug!("Using format {:?} (quiet: {})", format, args.quiet);

    let (tasks, directory) = Snapshot::load(&args.snapshot)?.into_parts();
    info!("Loaded {} tasks from {}", tasks.len(), args.snapshot);

    let ctx = ResolveContext::new();
    let resolver = IdResolver::new(directory, args.no_resolve);
    let tasks = apply_filters(&ctx, tasks, &filters, &resolver)?;

    let mut render = RenderContext::new(out, new_task_format(&format, args.quiet), !args.no_trunc);
    print(&ctx, &mut render, &FormatWriter::new(), &tasks, &resolver)?;
    Ok(())
}
