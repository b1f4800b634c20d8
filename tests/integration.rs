// SPDX-License-Identifier: MPL-2.0
use iced_gallery::catalog::Catalog;
use iced_gallery::config;
use iced_gallery::error::{CatalogError, Error};
use iced_gallery::gallery::grid::visible_tiles;
use iced_gallery::gallery::{
    group_by_series, Action, ActiveView, ArtworkDetail, Filter, ViewState,
};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::infrastructure::{read_code_asset, save_image_copy};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CATALOG: &str = r#"
[[artwork]]
id = "entropy_garden_01"
title = "Entropy Garden I"
series = "Entropy Garden"
category = "physics"
description = "Order dissolving into equilibrium."
date = "2025-08-04"
image = "images/entropy_garden_01.png"
code = "code/entropy_garden_01.py"

[[artwork]]
id = "neural_bloom_01"
title = "Neural Bloom"
series = "Neural Bloom"
category = "consciousness"
description = "Activation maps rendered as petals."
date = "2025-07-28"
image = "images/neural_bloom_01.png"
code = "code/neural_bloom_01.py"

[[artwork]]
id = "entropy_garden_02"
title = "Entropy Garden II"
series = "Entropy Garden"
category = "emergence"
description = "The second state of the garden."
date = "2025-08-09"
image = "images/entropy_garden_02.png"
code = "code/entropy_garden_02.py"
"#;

fn write_gallery(root: &Path) -> std::path::PathBuf {
    fs::create_dir_all(root.join("images")).expect("failed to create images dir");
    fs::create_dir_all(root.join("code")).expect("failed to create code dir");
    for id in ["entropy_garden_01", "neural_bloom_01", "entropy_garden_02"] {
        fs::write(root.join(format!("images/{id}.png")), b"\x89PNG fake")
            .expect("failed to write image");
        fs::write(root.join(format!("code/{id}.py")), format!("# {id}\n"))
            .expect("failed to write code");
    }
    let path = root.join("catalog.toml");
    fs::write(&path, CATALOG).expect("failed to write catalog");
    path
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let english = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-timeline"), "Timeline");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let french = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-timeline"), "Chronologie");
}

#[test]
fn catalog_file_drives_every_projection() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog_path = write_gallery(dir.path());

    let catalog = Catalog::load_from_path(&catalog_path).expect("catalog should load");

    let summary = catalog.summary();
    assert_eq!(summary.artwork_count, 3);
    assert_eq!(summary.series_count, 2);
    assert_eq!(
        catalog.categories(),
        vec!["physics", "consciousness", "emergence"]
    );

    let groups = group_by_series(catalog.artworks());
    let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();
    assert_eq!(names, ["Entropy Garden", "Neural Bloom"]);
    assert_eq!(groups[0].count(), 2);

    let first = &catalog.artworks()[0];
    assert_eq!(
        first.image(),
        dir.path().join("images/entropy_garden_01.png").as_path()
    );
    assert!(first.image().exists());

    let detail = ArtworkDetail::from_artwork(first);
    assert_eq!(detail.title, "Entropy Garden I");
    assert_eq!(detail.date, "August 4, 2025");
    assert_eq!(detail.download_name, "entropy_garden_01.png");
}

#[test]
fn timeline_focus_then_filter_round_trip() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load_from_path(&write_gallery(dir.path())).expect("catalog loads");
    let categories = catalog.categories();
    let groups = group_by_series(catalog.artworks());

    let state =
        ViewState::new(ActiveView::Timeline).apply(groups[0].focus_action(categories.as_slice()));
    assert_eq!(state.view(), ActiveView::Gallery);
    assert_eq!(state.filter(), &Filter::Category("physics".into()));

    let shown: Vec<usize> = visible_tiles(catalog.artworks(), state.filter())
        .map(|(index, _)| index)
        .collect();
    assert_eq!(shown, vec![0]);

    let state = state.apply(Action::ApplyFilter(Filter::All));
    assert_eq!(visible_tiles(catalog.artworks(), state.filter()).count(), 3);
}

#[test]
fn duplicate_ids_are_rejected_by_name() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("catalog.toml");
    let duplicated = format!(
        "{CATALOG}\n[[artwork]]\nid = \"entropy_garden_01\"\ntitle = \"Again\"\n\
         series = \"Entropy Garden\"\ncategory = \"physics\"\ndate = \"2025-08-10\"\n\
         image = \"again.png\"\ncode = \"again.py\"\n"
    );
    fs::write(&path, duplicated).expect("failed to write catalog");

    match Catalog::load_from_path(&path) {
        Err(Error::Catalog(CatalogError::DuplicateId(id))) => {
            assert_eq!(id, "entropy_garden_01");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[tokio::test]
async fn code_and_image_assets_are_reachable_from_catalog() {
    let dir = tempdir().expect("failed to create temp dir");
    let catalog = Catalog::load_from_path(&write_gallery(dir.path())).expect("catalog loads");
    let artwork = &catalog.artworks()[1];

    let source = read_code_asset(artwork.code().to_path_buf())
        .await
        .expect("code should be readable");
    assert_eq!(source, "# neural_bloom_01\n");

    let destination = dir.path().join("downloads").join(artwork.download_name());
    let written = save_image_copy(artwork.image().to_path_buf(), destination.clone())
        .await
        .expect("copy should succeed");
    assert_eq!(written, destination);
    assert_eq!(
        fs::read(&destination).expect("copy exists"),
        b"\x89PNG fake".to_vec()
    );
}

#[tokio::test]
async fn missing_code_asset_is_an_io_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let result = read_code_asset(dir.path().join("nope.py")).await;
    assert!(matches!(result, Err(Error::Io(_))));
}
