use clap::{Arg, ArgAction, Command};
use idiomatic::Language;
use idiomatic_mt::{
    MockMode, MockTranslator, TranslationOrchestrator, TranslatorConfig, load_idiom_store,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("idiomatic-mt")
        .version("0.1.0")
        .about("Idiom-aware translation from the command line")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-language")
                .help("Target language code (e.g., fr, es, de)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source-language")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("idioms")
                .long("idioms")
                .short('i')
                .help("Hint that the text contains idioms (enables deeper idiom search)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of network providers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the full translation result as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed translation process")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").ok_or("missing text")?;
    let target_code = matches
        .get_one::<String>("target-language")
        .ok_or("missing target language")?;
    let source_code = matches
        .get_one::<String>("source-language")
        .ok_or("missing source language")?;
    let contains_idioms = matches.get_flag("idioms");
    let use_mock = matches.get_flag("mock");
    let as_json = matches.get_flag("json");
    let verbose = matches.get_flag("verbose");

    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source: Language = match source_code.parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ Invalid source language: {}", e);
            return Err(e.into());
        }
    };
    let target: Language = match target_code.parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ Invalid target language: {}", e);
            return Err(e.into());
        }
    };

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 {} ({}) → {} ({})", source.name(), source, target.name(), target);
        println!();
    }

    let store = load_idiom_store()?;
    let orchestrator = if use_mock {
        TranslationOrchestrator::new(store)
            .with_libre_endpoint(Arc::new(MockTranslator::new(MockMode::Suffix)))
    } else {
        let config = TranslatorConfig::from_env()?;
        if config.libre_endpoint.is_none() {
            eprintln!("⚠️  LIBRE_TRANSLATE_ENDPOINT not set, skipping LibreTranslate");
            eprintln!("   Set it with: export LIBRE_TRANSLATE_ENDPOINT=http://localhost:5000/translate");
        }
        TranslationOrchestrator::from_config(&config, store)?
    };

    let result = orchestrator
        .translate(text, source, target, contains_idioms)
        .await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if verbose {
        println!("🔧 Method: {}", result.translation_method);
        if result.translation_method.is_idiom_based() {
            println!("📚 Answered from the idiom tables");
        }
        if let Some(idiom) = &result.idiom_data {
            println!(
                "💡 Idiom: \"{}\" ({}, score {})",
                idiom.original_idiom, idiom.match_type, idiom.score
            );
        }
        println!();
    }
    println!("{}", result.translated_text);

    Ok(())
}
