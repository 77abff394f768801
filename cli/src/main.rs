mod writer;

use clap::{Parser, ValueEnum};
use declgen_core::{Generator, GeneratorOptions};
use declgen_types::{CvStyle, OperationKind};
use miette::{Diagnostic, IntoDiagnostic, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;
use writer::CppTestWriter;

/// declgen - Generate declarator conformance tests
#[derive(Parser, Debug)]
#[command(name = "declgen")]
#[command(about = "Enumerate derived C++ types and write a typedecl test program", long_about = None)]
struct Args {
    /// Terminal type every construction starts from
    #[arg(long, default_value = "int")]
    seed: String,

    /// Maximum composition depth
    #[arg(long, default_value_t = 6)]
    max_depth: usize,

    /// Stop after visiting this many types
    #[arg(long, default_value_t = 7200)]
    node_budget: usize,

    /// Stop after emitting this many fresh assertions
    #[arg(long, default_value_t = 7200)]
    assertion_budget: usize,

    /// Comma-separated operations, in the order they are offered
    #[arg(long, value_delimiter = ',')]
    operations: Option<Vec<OperationKind>>,

    /// Keep one representative per family of symmetric operations
    #[arg(long)]
    essential: bool,

    /// Prune constructions that normalization would erase
    #[arg(long)]
    prune_insignificant: bool,

    /// Drop ref-qualifiers of member functions named through a pointer-to-member
    #[arg(long)]
    elide_member_ref_qualifiers: bool,

    /// Where cv-qualifiers are spelled in declarators
    #[arg(long, value_enum, default_value_t = CvStyleArg::West)]
    cv_style: CvStyleArg,

    /// Header providing `typedecl<T>()`
    #[arg(long, default_value = "typedecl.hpp")]
    header: String,

    /// Write the program here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print every case to stderr as it is generated
    #[arg(long)]
    trace: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CvStyleArg {
    /// `const int*const`
    West,
    /// `int const* const`
    East,
}

impl From<CvStyleArg> for CvStyle {
    fn from(arg: CvStyleArg) -> Self {
        match arg {
            CvStyleArg::West => CvStyle::West,
            CvStyleArg::East => CvStyle::East,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("cannot create output file `{}`", path.display())]
    #[diagnostic(code(declgen::output))]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(declgen::options), help("see `declgen --help` for the accepted values"))]
    Options(#[from] declgen_core::OptionsError),
}

impl Args {
    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            seed: self.seed.clone(),
            max_depth: self.max_depth,
            node_budget: self.node_budget,
            assertion_budget: self.assertion_budget,
            operations: self
                .operations
                .clone()
                .unwrap_or_else(GeneratorOptions::default_operations),
            essential_variations: self.essential,
            prune_insignificant: self.prune_insignificant,
            elide_member_ref_qualifiers: self.elide_member_ref_qualifiers,
            cv_style: self.cv_style.into(),
        }
    }
}

fn generate<W: Write>(args: &Args, generator: &mut Generator, out: W) -> Result<()> {
    let mut writer = CppTestWriter::new(out, args.trace);
    writer.begin(&args.header, &args.seed).into_diagnostic()?;
    let summary = generator.run(&mut writer).into_diagnostic()?;
    writer.finish().into_diagnostic()?;

    tracing::info!(
        total = summary.visited,
        fresh = summary.fresh,
        duplicates = summary.duplicates,
        "Generated {} types",
        summary.visited
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control log level; default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut generator = Generator::new(args.generator_options()).map_err(CliError::from)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            generate(&args, &mut generator, BufWriter::new(file))
        }
        None => generate(&args, &mut generator, std::io::stdout().lock()),
    }
}
