use anyhow::{anyhow, Result};
use duct::cmd;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next().unwrap_or_else(|| {
        eprintln!("Usage: cargo xtask <command>");
        std::process::exit(1);
    });

    match task.as_str() {
        "build" => build(),
        "check" => check(),
        "release" => release(),
        "demo" => demo(),
        other => Err(anyhow!("Unknown xtask command `{}`", other)),
    }
}

fn build() -> Result<()> {
    println!("🔧 Building inspecta");
    cmd!("cargo", "build", "--release").run()?;
    println!("✔ Build complete");
    Ok(())
}

fn check() -> Result<()> {
    println!("🔍 Running fmt, clippy, and tests…");

    cmd!("cargo", "fmt", "--all", "--check").run()?;
    cmd!("cargo", "clippy", "--", "-D", "warnings").run()?;
    cmd!("cargo", "test", "--workspace").run()?;

    println!("✔ Checks passed");
    Ok(())
}

fn demo() -> Result<()> {
    println!("🧪 Running a sample analysis");
    cmd!(
        "cargo",
        "run",
        "--bin",
        "inspecta",
        "--",
        "analyze",
        "Loose bolts, vibration, and heavy corrosion on the frame."
    )
    .run()?;
    Ok(())
}

fn release() -> Result<()> {
    println!("🚀 Building release artifacts");

    cmd!("cargo", "build", "--release").run()?;

    let release_root = PathBuf::from("target/release-bundle");
    if release_root.exists() {
        fs::remove_dir_all(&release_root)?;
    }
    fs::create_dir_all(&release_root)?;

    let bin_name = if cfg!(windows) {
        "inspecta.exe"
    } else {
        "inspecta"
    };
    let bin_src = Path::new("target/release").join(bin_name);
    let bin_dst = release_root.join(bin_name);
    fs::copy(&bin_src, &bin_dst)?;

    let manifest = serde_json::json!({
      "name": "inspecta",
      "version": env!("CARGO_PKG_VERSION"),
      "binary": bin_name,
      "os": std::env::consts::OS,
      "arch": std::env::consts::ARCH,
    });
    fs::write(release_root.join("manifest.json"), manifest.to_string())?;

    if cfg!(windows) {
        cmd!(
            "powershell",
            "-Command",
            "Compress-Archive",
            "-Path",
            "target/release-bundle/*",
            "-DestinationPath",
            "target/inspecta.zip"
        )
        .run()?;
        println!("📦 Created target/inspecta.zip");
    } else {
        cmd!(
            "tar",
            "-czf",
            "target/inspecta.tar.gz",
            "-C",
            "target",
            "release-bundle"
        )
        .run()?;
        println!("📦 Created target/inspecta.tar.gz");
    }

    println!("✔ Release artifacts ready");
    Ok(())
}
