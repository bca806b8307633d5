//! `mountfix demo` command - show what changes per engine.

use clap::Args;

use mountfix_core::{
    fix_dockerfile_content, generate_mount_options, get_build_command, BuildEngine,
};

use crate::output;

const SAMPLE_DIRECTIVE: &str = "RUN --mount=type=bind,from=source,source=hello,target=/tmp/hello,z \\\n    cp -ar /tmp/hello /tmp/features";

#[derive(Args)]
pub struct DemoArgs;

pub fn execute(_args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let engines = [BuildEngine::Docker, BuildEngine::Podman, BuildEngine::Buildah];

    println!("Mount options and build commands:");
    let mut table = output::new_table(&["ENGINE", "MOUNT OPTIONS", "BUILD COMMAND"]);
    for engine in &engines {
        let mount = generate_mount_options(engine, "/src", "/dst");
        let argv = get_build_command(engine, "Dockerfile", ".", "test");
        table.add_row(vec![
            engine.to_string(),
            mount,
            output::format_command(&argv),
        ]);
    }
    println!("{table}");

    println!();
    println!("Dockerfile content fix:");
    println!("  Before:");
    println!("{}", output::indent(SAMPLE_DIRECTIVE, 4));
    println!("  After:");
    println!(
        "{}",
        output::indent(&fix_dockerfile_content(SAMPLE_DIRECTIVE), 4)
    );

    Ok(())
}
