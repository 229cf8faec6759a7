use clap::Parser;
use sslatest::{cli::Cli, config::Config, renamer, scanner, selector};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;
    config.merge_cli(&cli);

    // 結果行は標準出力のみに出す。進捗は標準エラー出力。
    let dir = config.resolved_dir()?;

    if cli.verbose {
        eprintln!("📸 sslatest - スクリーンショット選択\n");
        eprintln!("[1/3] ディレクトリをスキャン中... {}", dir.display());
    }
    let entries = scanner::scan_dir(&dir)?;
    if cli.verbose {
        eprintln!("✔ {}枚の画像を検出\n", entries.len());
    }

    let selected = selector::select_latest(entries, config.count);
    if cli.verbose {
        eprintln!("[2/3] 最新{}枚を選択\n", selected.len());
    }

    let outputs = renamer::process_entries(&dir, &selected, &config)?;
    if cli.verbose {
        eprintln!("[3/3] 完了\n");
    }

    println!("{}", outputs.join(" "));

    Ok(())
}
