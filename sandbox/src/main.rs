use anyhow::{Context, Result};
use entmeta_core::ecs::{ComponentLifecycle, EntityStore};
use entmeta_data::meta::{MetaComponent, MetaConfig, MetaDef};

fn load_config() -> Result<MetaConfig> {
    match std::env::args().nth(1) {
        Some(path) => MetaConfig::from_ron_file(&path)
            .with_context(|| format!("Failed to load metadata config from `{path}`")),
        None => Ok(MetaConfig::default()),
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let mut entities = EntityStore::new();
    let mut meta = MetaComponent::with_config(&config);

    // A hand-placed entity, a prototype instance and an anonymous prop.
    let gate = entities.create_entity();
    meta.set_identifier(gate, "north_gate");
    meta.set_source_tag(gate, "levels/valley.scene");

    let tree = entities.create_entity();
    let prototype = MetaDef {
        comment: Some("generic tree".to_string()),
        ..Default::default()
    };
    meta.set_from_prototype(tree, &prototype);

    let prop = entities.create_entity();
    meta.on_attach(prop);

    let mut saved = Vec::new();
    for entity in [gate, tree, prop] {
        if let Some(bytes) = meta.export_raw_data(entity)? {
            log::info!(
                "Exported entity {} as `{}` ({} bytes)",
                entity,
                meta.identifier(entity),
                bytes.len()
            );
            saved.push(bytes);
        }
    }

    // Destroying the prop without notifying the component leaves a stale entry
    // that the next lookup cleans up.
    let prop_id = meta.identifier(prop).to_string();
    entities.despawn(prop);
    if meta.resolve(&prop_id, &entities).is_none() {
        log::info!("`{}` no longer resolves after its entity was destroyed", prop_id);
    }

    let mut reloaded_world = EntityStore::new();
    let mut reloaded = MetaComponent::with_config(&config);
    for bytes in &saved {
        let entity = reloaded_world.create_entity();
        reloaded.add_from_raw_data(entity, bytes)?;
        reloaded.on_attach(entity);
    }

    for (entity, data) in reloaded.iter() {
        log::info!(
            "Reloaded entity {}: id=`{}` prototype=`{}` comment=`{}`",
            entity,
            data.identifier(),
            data.prototype,
            data.comment
        );
    }
    let gate_again = reloaded
        .resolve("north_gate", &reloaded_world)
        .context("`north_gate` should resolve after reload")?;
    log::info!("`north_gate` resolves to entity {}", gate_again);

    Ok(())
}
