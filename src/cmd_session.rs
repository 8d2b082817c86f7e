//! Command handlers: session, models, resolve, favorites and settings.

use std::error::Error;
use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use designforge_config::Config;
use designforge_core::{
    Favorites, KeyValueStore, Phase, SessionController, Settings, SettingsStore,
};
use designforge_protocols::{Design, ImageData, ProviderError, ProviderId};

use crate::cli::{FavoritesAction, SessionArgs, SettingsAction};
use crate::register::{all_models, build_resolver, build_session, open_store};

/// Prefer the message the session recorded, which carries the phase prefix.
fn session_failure(session: &SessionController, err: ProviderError) -> Box<dyn Error> {
    let message = session.snapshot().error.unwrap_or_else(|| err.to_string());
    error!("{}", message);
    message.into()
}

/// Run analyze → generate (→ expand) and print the resulting designs as JSON.
pub(crate) async fn run_session(config: &Config, args: SessionArgs) -> Result<(), Box<dyn Error>> {
    let store = open_store(config);
    let settings = SettingsStore::new(store.clone()).load();
    let session = build_session(config, &settings)?;

    let image = ImageData::load(&args.image).await?;
    info!(
        "Loaded {} ({}, {} bytes)",
        args.image.display(),
        image.media_type,
        image.bytes.len()
    );
    session.set_image(image);
    session.set_prompt(args.prompt);
    if let Some(model) = &args.analysis_model {
        session.select_model(Phase::Analysis, model);
    }
    if let Some(model) = &args.generation_model {
        session.select_model(Phase::Generation, model);
    }

    let analysis = session
        .analyze()
        .await
        .map_err(|e| session_failure(&session, e))?;
    info!("Analysis found {} element(s)", analysis.elements.len());

    let designs = session
        .generate()
        .await
        .map_err(|e| session_failure(&session, e))?;

    if let Some(directions) = &args.expand {
        let first = designs.first().ok_or("No design to expand")?;
        session
            .expand(first.id, directions)
            .await
            .map_err(|e| session_failure(&session, e))?;
    }

    let state = session.snapshot();
    if args.favorite {
        save_favorites(store, &state.generated_designs)?;
    }

    let output = json!({
        "analysis": state.analysis_result,
        "designs": state.generated_designs,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn save_favorites(
    store: Arc<dyn KeyValueStore>,
    designs: &[Design],
) -> Result<(), Box<dyn Error>> {
    let favorites = Favorites::new(store);
    let mut added = 0;
    for design in designs {
        if favorites.add(design.clone())? {
            added += 1;
        }
    }
    info!("Saved {} design(s) to favorites", added);
    Ok(())
}

/// Print every model grouped by provider.
pub(crate) fn list_models(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut current = None;
    for (provider, model) in all_models(config) {
        if current != Some(provider) {
            println!("{}:", provider.display_name());
            current = Some(provider);
        }
        println!("  {:<20} {:<20} {}", model.id, model.name, model.description);
    }
    Ok(())
}

/// Print the provider that would serve a model id.
pub(crate) fn resolve_model(config: &Config, model: &str) -> Result<(), Box<dyn Error>> {
    let provider = build_resolver(config)?.resolve(model)?;
    println!("{} -> {}", model, provider);
    Ok(())
}

pub(crate) fn handle_favorites(config: &Config, action: FavoritesAction) -> Result<(), Box<dyn Error>> {
    let favorites = Favorites::new(open_store(config));

    match action {
        FavoritesAction::List { format } => {
            let designs = favorites.list();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&designs)?);
                return Ok(());
            }
            if designs.is_empty() {
                println!("No favorites saved.");
                return Ok(());
            }
            for design in designs {
                println!(
                    "{}  {}  {}",
                    design.id,
                    design.timestamp.format("%Y-%m-%d %H:%M"),
                    design.description
                );
            }
        }
        FavoritesAction::Remove { id } => {
            let id: Uuid = id.parse()?;
            if favorites.remove(id)? {
                println!("Removed {}", id);
            } else {
                println!("No favorite with id {}", id);
            }
        }
    }
    Ok(())
}

fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }
    let tail: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("****{}", tail)
}

fn set_api_key(settings: &mut Settings, provider: ProviderId, key: String) {
    let slot = match provider {
        ProviderId::Google => &mut settings.api_keys.google,
        ProviderId::Anthropic => &mut settings.api_keys.anthropic,
        ProviderId::OpenAi => &mut settings.api_keys.openai,
    };
    *slot = key.trim().to_string();
}

pub(crate) fn handle_settings(config: &Config, action: SettingsAction) -> Result<(), Box<dyn Error>> {
    let store = SettingsStore::new(open_store(config));
    let mut settings = store.load();

    match action {
        SettingsAction::Show => {
            for id in ProviderId::ALL {
                let key = match id {
                    ProviderId::Google => &settings.api_keys.google,
                    ProviderId::Anthropic => &settings.api_keys.anthropic,
                    ProviderId::OpenAi => &settings.api_keys.openai,
                };
                println!("{:<10} {}", id.as_str(), mask_key(key));
            }
            println!("analysis   {}", settings.default_models.analysis);
            println!("generation {}", settings.default_models.generation);
            return Ok(());
        }
        SettingsAction::SetKey { provider, key } => {
            let provider: ProviderId = provider.parse()?;
            set_api_key(&mut settings, provider, key);
        }
        SettingsAction::SetModel { phase, model } => match phase.to_lowercase().as_str() {
            "analysis" => settings.default_models.analysis = model,
            "generation" => settings.default_models.generation = model,
            other => return Err(format!("unknown phase: {}", other).into()),
        },
    }

    store.save(&settings)?;
    println!("Settings saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(not set)");
        assert_eq!(mask_key("sk-abcdef1234"), "****1234");
        assert_eq!(mask_key("ab"), "****ab");
    }

    #[test]
    fn test_set_api_key_trims() {
        let mut settings = Settings::default();
        set_api_key(&mut settings, ProviderId::Anthropic, "  sk-ant  ".to_string());
        assert_eq!(settings.api_keys.anthropic, "sk-ant");
        assert!(settings.credentials().contains(ProviderId::Anthropic));
    }

    #[test]
    fn test_settings_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.path = Some(dir.path().join("store.json"));

        handle_settings(
            &config,
            SettingsAction::SetKey {
                provider: "openai".to_string(),
                key: "sk-test".to_string(),
            },
        )
        .unwrap();
        handle_settings(
            &config,
            SettingsAction::SetModel {
                phase: "analysis".to_string(),
                model: "gpt-4o".to_string(),
            },
        )
        .unwrap();

        let settings = SettingsStore::new(open_store(&config)).load();
        assert_eq!(settings.api_keys.openai, "sk-test");
        assert_eq!(settings.default_models.analysis, "gpt-4o");
    }

    #[test]
    fn test_settings_unknown_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.path = Some(dir.path().join("store.json"));

        let err = handle_settings(
            &config,
            SettingsAction::SetModel {
                phase: "layout".to_string(),
                model: "x".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown phase"));
    }
}
