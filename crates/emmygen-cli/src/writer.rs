use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use emmygen_gen::Generator;
use emmygen_lua::{render_global, LuaFile, NamespaceTree};
use emmygen_model::{ReflectionDump, TypeId};
use emmygen_select::select_types;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{AssemblyConfig, GeneratorConfig};

/// What one full run produced, for the console or CI summary.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub files: Vec<PathBuf>,
    pub generated_types: usize,
    pub failed_types: usize,
}

/// Runs every configured dump through selection and generation, then writes
/// the per-namespace stubs plus the shared `global.lua` index.
pub fn run_generation(config: &GeneratorConfig) -> Result<RunReport> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output dir {}", config.output_dir.display()))?;

    let mut report = RunReport {
        files: Vec::new(),
        generated_types: 0,
        failed_types: 0,
    };
    let mut global = NamespaceTree::new();

    for assembly in &config.assemblies {
        write_assembly(assembly, &config.output_dir, &mut global, &mut report)?;
    }

    let global_path = config.output_dir.join("global.lua");
    fs::write(&global_path, render_global(&global))
        .with_context(|| format!("writing {}", global_path.display()))?;
    tracing::info!(path = %global_path.display(), "generated global index");
    report.files.push(global_path);
    Ok(report)
}

fn write_assembly(
    assembly: &AssemblyConfig,
    output_dir: &Path,
    global: &mut NamespaceTree,
    report: &mut RunReport,
) -> Result<()> {
    tracing::info!(path = %assembly.path.display(), "loading reflection dump");
    let raw = fs::read_to_string(&assembly.path)
        .with_context(|| format!("reading dump {}", assembly.path.display()))?;
    let dump: ReflectionDump = serde_json::from_str(&raw)
        .with_context(|| format!("parsing dump {}", assembly.path.display()))?;
    let (assembly_name, store) = dump
        .into_store()
        .with_context(|| format!("validating dump {}", assembly.path.display()))?;

    let generator = Generator::new(&store);
    let selected = select_types(&generator.mapper(), &assembly.types);
    tracing::info!(count = selected.len(), "found types to generate");

    // Namespace groups keep selection order; the first type seen in a
    // namespace fixes that file's position in the report.
    let mut groups: Vec<(String, Vec<TypeId>)> = Vec::new();
    for &id in &selected {
        let Some(def) = store.get(id) else { continue };
        global.insert(def.namespace.as_deref());
        let namespace = def.namespace.clone().unwrap_or_default();
        match groups.iter_mut().find(|(ns, _)| *ns == namespace) {
            Some((_, ids)) => ids.push(id),
            None => groups.push((namespace, vec![id])),
        }
    }

    let outcomes: Vec<NamespaceOutcome> = groups
        .par_iter()
        .map(|(namespace, ids)| {
            write_namespace(&generator, &assembly_name, namespace, ids, output_dir)
        })
        .collect::<Result<_>>()?;

    for outcome in outcomes {
        report.files.push(outcome.path);
        report.generated_types += outcome.generated;
        report.failed_types += outcome.failed;
    }
    Ok(())
}

struct NamespaceOutcome {
    path: PathBuf,
    generated: usize,
    failed: usize,
}

fn write_namespace(
    generator: &Generator<'_>,
    assembly_name: &str,
    namespace: &str,
    ids: &[TypeId],
    output_dir: &Path,
) -> Result<NamespaceOutcome> {
    let mut declarations = Vec::with_capacity(ids.len());
    let mut failed = 0;
    for result in generator.generate_many(ids) {
        match result {
            Ok(decl) => declarations.push(decl.text),
            Err(error) => {
                tracing::warn!(%error, "skipping type");
                failed += 1;
            }
        }
    }

    let file = LuaFile {
        assembly: assembly_name.to_owned(),
        namespace: (!namespace.is_empty()).then(|| namespace.to_owned()),
        declarations,
    };

    let relative = if namespace.is_empty() {
        "-".to_owned()
    } else {
        namespace.replace('.', "/")
    };
    let path = output_dir.join(assembly_name).join(format!("{relative}.lua"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display()))?;
    }
    tracing::info!(path = %path.display(), "generating");
    fs::write(&path, file.render()).with_context(|| format!("writing {}", path.display()))?;

    Ok(NamespaceOutcome {
        path,
        generated: ids.len() - failed,
        failed,
    })
}
