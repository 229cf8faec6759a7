use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sslatest")]
#[command(about = "最新のスクリーンショットを選択・リネームして出力", long_about = None)]
pub struct Cli {
    /// 処理する最新スクリーンショットの枚数（デフォルト: 1）
    #[arg(value_name = "COUNT")]
    pub count: Option<usize>,

    /// スクリーンショットディレクトリ（デフォルト: ~/Pictures/Screenshots）
    #[arg(short, long)]
    pub dir: Option<String>,

    /// リネームせずファイル名をそのまま出力
    #[arg(long)]
    pub no_rename: bool,

    /// フルパスではなくファイル名のみ出力
    #[arg(long)]
    pub no_output_path: bool,

    /// 進捗ログを標準エラー出力に表示
    #[arg(short, long)]
    pub verbose: bool,
}
