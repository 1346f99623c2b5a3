use clap::{Parser, Subcommand};
use photo_gallery_common::{InterleavePolicy, KindFilter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery")]
#[command(about = "静的フォトギャラリー用のメディアリスト生成・整列ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アセットフォルダをスキャンして photos.json / videos.json を生成
    Scan {
        /// 公開ルート（デフォルト: public）
        #[arg(default_value = "public")]
        root: PathBuf,

        /// 写真フォルダ（省略時: 公開ルート/設定のphotos_subdir）
        #[arg(long)]
        photos_dir: Option<PathBuf>,

        /// 動画フォルダ（省略時: 公開ルート/設定のvideos_subdir）
        #[arg(long)]
        videos_dir: Option<PathBuf>,

        /// JSON出力先ディレクトリ（省略時: 公開ルート）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// リストを読み込み、重複除去・シャッフル・交互配置した表示順を出力
    List {
        /// 公開ルート（デフォルト: public）
        #[arg(default_value = "public")]
        root: PathBuf,

        /// 写真リスト（パスまたはURL、省略時: 公開ルート/photos.json）
        #[arg(long)]
        photos: Option<String>,

        /// 動画リスト（パスまたはURL、省略時: 公開ルート/videos.json）
        #[arg(long)]
        videos: Option<String>,

        /// シャッフルする
        #[arg(short, long)]
        shuffle: bool,

        /// シャッフルの乱数シード（再現用）
        #[arg(long)]
        seed: Option<u64>,

        /// 表示フィルタ (all/photo/video)
        #[arg(short, long, default_value = "all")]
        filter: KindFilter,

        /// 交互配置方式 (balanced/round-robin、省略時は設定値)
        #[arg(long)]
        policy: Option<InterleavePolicy>,

        /// 表示中の指定番号をライトボックスで開く
        #[arg(long)]
        open: Option<usize>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 重複除去で落とされるファイル名を表示
    Dupes {
        /// 公開ルート（デフォルト: public）
        #[arg(default_value = "public")]
        root: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 交互配置方式を設定 (balanced/round-robin)
        #[arg(long)]
        set_interleave: Option<InterleavePolicy>,

        /// 読み込み時のシャッフルを設定 (true/false)
        #[arg(long)]
        set_shuffle: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
