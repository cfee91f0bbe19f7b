use std::fmt::Write as _;

use anyhow::{Context, Result};
use subkitchen_substitution::{Resolver, SubstitutionItem};

use crate::config::Config;

fn resolver(config: &Config) -> Result<Resolver> {
    crate::catalog::load_resolver(&config.catalog).context("Failed to load substitution catalogs")
}

pub fn lookup(config: Config, ingredient: &str) -> Result<()> {
    let resolver = resolver(&config)?;
    let key = resolver.canonical_key(ingredient);
    let items = resolver.get_substitutions(ingredient);

    println!("{}", render_lookup(ingredient, &key, &items));
    Ok(())
}

pub fn search(config: Config, query: &str) -> Result<()> {
    let resolver = resolver(&config)?;

    for key in resolver.search_ingredients(query) {
        println!("{key}");
    }
    Ok(())
}

pub fn check(config: Config) -> Result<()> {
    let resolver = resolver(&config)?;
    let stats = resolver.store().stats();

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn render_lookup(ingredient: &str, key: &str, items: &[SubstitutionItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{ingredient} (canonical key: {key})");

    if items.is_empty() {
        let _ = write!(out, "No known substitutes.");
        return out;
    }

    for (position, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} [{}]",
            position + 1,
            item.substitute_ingredient,
            item.ratio
        );
        if let Some(notes) = &item.notes {
            let _ = writeln!(out, "    {notes}");
        }
        if let Some(nutrition) = &item.nutrition {
            let delta = nutrition.delta();
            let serving = nutrition.original.serving.as_deref().unwrap_or("serving");
            let _ = writeln!(
                out,
                "    per {serving}: calories {:+.1}, fat {:+.1}g, carbs {:+.1}g, protein {:+.1}g",
                delta.calories, delta.fat, delta.carbs, delta.protein
            );
        }
    }

    out.trim_end().to_string()
}
