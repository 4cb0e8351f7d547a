//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::descriptor::Descriptor;

/// daemon-gen - daemon launcher generator
///
/// Validates an application descriptor and writes a supervisor-ready launcher
/// script tree plus its app-config.sh into an output directory.
#[derive(Parser, Debug)]
#[command(
    name = "daemon-gen",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate daemon launcher scripts for Java applications and executables",
    long_about = "daemon-gen validates an application descriptor, unpacks the bundled launcher \
                  scripts into an output directory and writes the app-config.sh they source \
                  at startup.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  daemon-gen generate --descriptor daemon.yaml\n    \
                  daemon-gen generate --app-type JAVA --java-home /usr/lib/jvm/17 \\\n        \
                  --main-method com.example.Main --application-name billing \\\n        \
                  --script-name billing.sh --output-directory target/daemon"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the launcher scripts and app-config.sh
    Generate(GenerateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the generate command
///
/// Descriptor values are layered: the descriptor file first, then
/// environment variables, then command-line flags.
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate from a descriptor file:\n    daemon-gen generate --descriptor daemon.yaml\n\n\
                  Override the output directory:\n    daemon-gen generate --descriptor daemon.yaml -o build/daemon\n\n\
                  Generate for an executable:\n    daemon-gen generate --app-type EXECUTABLE --executable-file bin/server \\\n      \
                  --application-name server --script-name server.sh -o target/daemon\n\n\
                  Use patched scripts instead of the built-in ones:\n    daemon-gen generate --descriptor daemon.yaml --bundle-dir ./patched-bundle")]
pub struct GenerateArgs {
    /// YAML descriptor file
    #[arg(long, short = 'd', env = "DAEMON_DESCRIPTOR", value_name = "FILE")]
    pub descriptor: Option<PathBuf>,

    /// Read bundled scripts from this directory instead of the built-in bundle
    #[arg(long, env = "DAEMON_BUNDLE_DIR", value_name = "DIR")]
    pub bundle_dir: Option<PathBuf>,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub fields: DescriptorArgs,
}

/// Descriptor fields settable from the environment or the command line
#[derive(Args, Debug, Default)]
pub struct DescriptorArgs {
    /// Application type (JAVA or EXECUTABLE)
    #[arg(long, env = "DAEMON_APP_TYPE")]
    pub app_type: Option<String>,

    /// Directory the scripts and app-config.sh are written to
    #[arg(long, short = 'o', env = "DAEMON_OUTPUT_DIRECTORY", value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Application name, used by the launcher for logging
    #[arg(long, env = "DAEMON_APPLICATION_NAME")]
    pub application_name: Option<String>,

    /// File name of the generated launcher script
    #[arg(long, env = "DAEMON_SCRIPT_NAME")]
    pub script_name: Option<String>,

    /// Main class (JAVA)
    #[arg(long, env = "DAEMON_MAIN_METHOD")]
    pub main_method: Option<String>,

    /// Executable to run (EXECUTABLE)
    #[arg(long, env = "DAEMON_EXECUTABLE_FILE")]
    pub executable_file: Option<String>,

    /// Java home used to start the application (JAVA)
    #[arg(long, env = "DAEMON_JAVA_HOME")]
    pub java_home: Option<String>,

    /// JVM arguments; may span several lines
    #[arg(long, env = "DAEMON_JVM_ARGS", allow_hyphen_values = true)]
    pub jvm_args: Option<String>,

    /// Program arguments; may span several lines
    #[arg(long, env = "DAEMON_APP_ARGS", allow_hyphen_values = true)]
    pub app_args: Option<String>,

    /// Additional classpath entry (repeatable, or comma-separated)
    #[arg(long = "classpath", env = "DAEMON_CLASSPATH", value_delimiter = ',', value_name = "ENTRY")]
    pub classpath: Vec<String>,
}

impl DescriptorArgs {
    /// The descriptor layer formed by environment and command line
    pub fn into_descriptor(self) -> Descriptor {
        Descriptor {
            kind: self.app_type,
            output_directory: self.output_directory,
            application_name: self.application_name,
            script_name: self.script_name,
            main_entry: self.main_method,
            executable_path: self.executable_file,
            runtime_home: self.java_home,
            jvm_args: self.jvm_args,
            program_args: self.app_args,
            classpath: self.classpath,
        }
    }
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    daemon-gen completions --shell bash > ~/.bash_completion.d/daemon-gen\n\n\
                  Generate zsh completions:\n    daemon-gen completions --shell zsh > ~/.zfunc/_daemon-gen")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
