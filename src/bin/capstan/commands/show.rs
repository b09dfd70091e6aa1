//! `capstan show` command

use anyhow::Result;

use capstan::core::wrappers::{find_tools_bin, WrapperTool};
use capstan::{HookContext, HostOs};

use crate::cli::ShowArgs;

pub fn execute(args: ShowArgs) -> Result<()> {
    let ctx = HookContext::resolve(args.project_dir)?;
    let host = HostOs::detect();

    println!("Host:    {}", host);
    println!("Project: {}", ctx.project_dir().display());
    println!();

    match find_tools_bin(ctx.project_dir()) {
        Some(set) => {
            println!("Wrappers: {}", set.dir().display());
            for tool in WrapperTool::ALL {
                println!("  {:<7} {}", tool.var_name(), set.path(tool).display());
            }

            if !host.is_windows() {
                println!();
                println!("Note: not a windows host, `capstan apply` leaves the environment untouched");
            }
        }
        None => {
            println!("Wrappers: not found, system toolchain stays in effect");
            println!();
            show_system_toolchain();
        }
    }

    Ok(())
}

/// Report what the fallback toolchain resolves to on this host.
fn show_system_toolchain() {
    println!("System toolchain:");

    for name in ["gcc", "g++", "ar", "ranlib"] {
        match which::which(name) {
            Ok(path) => {
                println!("  {:<7} {}", name, path.display());
            }
            Err(_) => {
                println!("  {:<7} not found", name);
            }
        }
    }

    // First line of gcc --version, when it runs at all.
    if let Ok(gcc) = which::which("gcc") {
        let output = std::process::Command::new(&gcc).arg("--version").output();
        if let Ok(output) = output {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if let Some(first_line) = stdout.lines().next() {
                println!();
                println!("  {}", first_line.trim());
            }
        }
    }
}
