use clap::Parser;
use photo_gallery::{cli, config, error, loader, render, scanner};
use photo_gallery_common::{duplicate_report, Gallery, MediaListProcessor};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use loader::ListSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use render::{OutputMode, TerminalView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { root, photos_dir, videos_dir, output } => {
            println!("📸 gallery - アセットスキャン\n");

            let photos_dir = photos_dir.unwrap_or_else(|| root.join(&config.photos_subdir));
            let videos_dir = videos_dir.unwrap_or_else(|| root.join(&config.videos_subdir));

            println!("[1/2] フォルダをスキャン中...");
            let lists = scanner::scan_assets(&photos_dir, &videos_dir, &config)?;
            println!("✔ 写真 {}件 / 動画 {}件を検出\n", lists.photos.len(), lists.videos.len());

            println!("[2/2] JSONを書き出し中...");
            let output_dir = output.unwrap_or(root);
            let (photos_path, videos_path) = scanner::write_lists(&output_dir, &lists)?;
            println!("✔ {}", photos_path.display());
            println!("✔ {}", videos_path.display());

            println!("\n✅ JSON生成完了");
        }

        Commands::List { root, photos, videos, shuffle, seed, filter, policy, open, json } => {
            let photos_source = photos
                .as_deref()
                .map(ListSource::parse)
                .unwrap_or_else(|| ListSource::in_root(&root, scanner::PHOTOS_JSON));
            let videos_source = videos
                .as_deref()
                .map(ListSource::parse)
                .unwrap_or_else(|| ListSource::in_root(&root, scanner::VIDEOS_JSON));

            let raw = loader::load_lists(&photos_source, &videos_source).await;

            let policy = match policy {
                Some(policy) => policy,
                None => config.effective_interleave()?,
            };
            let do_shuffle = shuffle || seed.is_some() || config.shuffle_on_load;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let mode = if json { OutputMode::Json } else { OutputMode::Text };
            let mut gallery = Gallery::new(TerminalView::new(mode), MediaListProcessor::new(policy));
            gallery.render(&raw.photos, &raw.videos, do_shuffle, &mut rng);
            gallery.set_filter(filter);

            if let Some(index) = open {
                if gallery.open(index).is_none() {
                    tracing::warn!(index, "no visible item at index, lightbox not opened");
                }
            }

            gallery.view().write_to(&mut std::io::stdout().lock())?;
        }

        Commands::Dupes { root } => {
            println!("🔍 gallery - 重複チェック\n");

            let raw = loader::load_lists(
                &ListSource::in_root(&root, scanner::PHOTOS_JSON),
                &ListSource::in_root(&root, scanner::VIDEOS_JSON),
            )
            .await;

            for (label, names) in [("写真", &raw.photos), ("動画", &raw.videos)] {
                let report = duplicate_report(names);
                println!("{}: {}件中 {}件が重複", label, names.len(), report.len());
                for entry in &report {
                    println!("  - {} → {} (キー: {})", entry.dropped, entry.kept, entry.key);
                }
            }
        }

        Commands::Config { set_interleave, set_shuffle, show } => {
            let mut config = config;

            if let Some(policy) = set_interleave {
                config.set_interleave(policy)?;
                println!("✔ 交互配置方式を設定しました: {}", policy);
            }

            if let Some(shuffle) = set_shuffle {
                config.set_shuffle_on_load(shuffle)?;
                println!("✔ 読み込み時シャッフルを設定しました: {}", shuffle);
            }

            if show {
                println!("設定:");
                println!("  写真フォルダ: {}", config.photos_subdir);
                println!("  動画フォルダ: {}", config.videos_subdir);
                println!("  写真拡張子: {}", config.photo_extensions.join(", "));
                println!("  動画拡張子: {}", config.video_extensions.join(", "));
                println!("  交互配置: {}", config.interleave);
                println!("  読み込み時シャッフル: {}", if config.shuffle_on_load { "有効" } else { "無効" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
