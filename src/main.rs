use clap::Parser;
use portfolio_common::{
    compute_visible, derive_visible_fields, derive_visible_skills, share_url, stack_category,
    taxonomy,
};
use portfolio_site::{catalog, cli, config, error, logging, report};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::{PortfolioError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    tracing::debug!(base_url = %config.base_url, "設定を読み込み");

    match cli.command {
        Commands::Projects { filter, format } => {
            let catalog = catalog::load_catalog(cli.data.as_deref(), &config)?;
            let state = filter.to_state(&config)?;
            let visible = compute_visible(catalog.records(), &state);
            tracing::debug!(total = catalog.len(), visible = visible.len(), "フィルタ適用");

            match format {
                OutputFormat::Text => {
                    print!("{}", report::format_projects(&visible, &state));
                    println!("共有URL: {}", share_url(&config.base_url, &state));
                }
                OutputFormat::Json => {
                    let report = report::ProjectsReport::new(&visible, &state, &config.base_url);
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }

        Commands::Facets { format } => {
            let catalog = catalog::load_catalog(cli.data.as_deref(), &config)?;
            let fields = derive_visible_fields(catalog.records());
            let skills = derive_visible_skills(catalog.records());

            match format {
                OutputFormat::Text => print!("{}", report::format_facets(&fields, &skills)),
                OutputFormat::Json => {
                    let value = serde_json::json!({ "fields": fields, "skills": skills });
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
            }
        }

        Commands::Link { filter } => {
            let state = filter.to_state(&config)?;
            println!("{}", share_url(&config.base_url, &state));
        }

        Commands::Stack { category } => match category {
            Some(name) => {
                let items = stack_category(&name)
                    .ok_or_else(|| PortfolioError::UnknownCategory(name.clone()))?;
                print!("{}", report::format_stack(name.trim(), items));
            }
            None => {
                for (name, items) in taxonomy::STACK_CATEGORIES {
                    print!("{}", report::format_stack(name, items));
                }
            }
        },

        Commands::Config { set_base_url, set_data, clear_data, set_summary_limit, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
                println!("✔ ベースURLを設定しました: {}", config.base_url);
            }

            if let Some(path) = set_data {
                if !path.exists() {
                    return Err(PortfolioError::FileNotFound(path.display().to_string()));
                }
                println!("✔ データパスを設定しました: {}", path.display());
                config.data_path = Some(path);
                changed = true;
            } else if clear_data {
                config.data_path = None;
                changed = true;
                println!("✔ データパスを解除しました（組み込みデータを使用）");
            }

            if let Some(limit) = set_summary_limit {
                config.summary_limit = limit.get();
                changed = true;
                println!("✔ トップページ表示件数を設定しました: {}", limit);
            }

            if changed {
                config.save()?;
                tracing::info!(path = %Config::config_path()?.display(), "設定を保存");
            }

            if show || !changed {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!(
                    "  データ: {}",
                    config
                        .data_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  トップページ表示件数: {}", config.summary_limit);
            }
        }
    }

    Ok(())
}
