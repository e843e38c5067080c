use glyphscript::{GlyphMap, GlyphRegistry, PAD, SYMBOLS, format_size};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use super::args::{DecodeArgs, EncodeArgs, LoaderArgs, MapArgs};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn encode(args: EncodeArgs, quiet: bool, registry: &GlyphRegistry) -> CommandResult {
    let map = GlyphMap::from_registry(registry, &args.set)?;
    let input = read_input(args.file.as_ref())?;
    let payload = glyphscript::encode(&input, &map);

    if !quiet {
        eprintln!(
            "encoded {} of script into {} of glyphs ({})",
            format_size(input.len() as u64),
            format_size(payload.len() as u64),
            map.name()
        );
    }

    write_output(args.output.as_ref(), &payload)
}

pub fn decode(args: DecodeArgs, quiet: bool, registry: &GlyphRegistry) -> CommandResult {
    let map = GlyphMap::from_registry(registry, &args.set)?;
    let input = read_input(args.file.as_ref())?;
    let script = glyphscript::decode(input.trim(), &map)?;

    if !quiet {
        eprintln!(
            "decoded {} of glyphs into {} of script",
            format_size(input.trim().len() as u64),
            format_size(script.len() as u64)
        );
    }

    write_output(args.output.as_ref(), &script)
}

pub fn loader(args: LoaderArgs, quiet: bool, registry: &GlyphRegistry) -> CommandResult {
    let map = GlyphMap::from_registry(registry, &args.set)?;
    let input = read_input(args.file.as_ref())?;
    let payload = glyphscript::encode(&input, &map);
    let loader_text = glyphscript::generate_loader(&payload, &map);

    if !quiet {
        eprintln!(
            "wrapped {} of script into a {} loader ({})",
            format_size(input.len() as u64),
            format_size(loader_text.len() as u64),
            map.name()
        );
    }

    write_output(args.output.as_ref(), &loader_text)
}

pub fn sets(registry: &GlyphRegistry) -> CommandResult {
    println!("Registered glyph sets:\n");
    for name in registry.set_names() {
        // set_names only returns registered keys
        let set = registry.get_set(name).unwrap();
        let count = set.glyphs.chars().count();
        let preview: String = set.glyphs.chars().take(12).collect();
        let suffix = if count > 12 { "..." } else { "" };
        println!("  {:<12} {:>3} glyphs  {}{}", name, count, preview, suffix);
    }
    Ok(())
}

pub fn map(args: MapArgs, registry: &GlyphRegistry) -> CommandResult {
    let map = GlyphMap::from_registry(registry, &args.set)?;
    println!("Symbol-to-glyph table for '{}':\n", map.name());
    for symbol in SYMBOLS.chars().chain(std::iter::once(PAD)) {
        // every symbol is mapped once the map builds
        println!("  {}  {}", symbol, map.glyph_for(symbol).unwrap());
    }
    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> CommandResult {
    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
