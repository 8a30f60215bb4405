use std::path::Path;

use bouncing_shadow::config::{HexColor, SceneConfig};
use bouncing_shadow::demo::DemoScene;
use bouncing_shadow::scene::{AlphaMap, Material};

#[test]
fn test_partial_json_keeps_defaults() {
    let config = SceneConfig::from_json_str(
        r##"{
            "sphere": { "color": "#ff0000", "roughness": 0.2 },
            "controls": { "damping_factor": 0.1 }
        }"##,
    )
    .unwrap();

    assert_eq!(config.sphere.color, HexColor(0xff0000));
    assert_eq!(config.sphere.roughness, 0.2);
    assert_eq!(config.sphere.radius, SceneConfig::default().sphere.radius);
    assert_eq!(config.controls.damping_factor, 0.1);
    assert!(config.controls.enable_damping);
    assert_eq!(config.camera, SceneConfig::default().camera);
}

#[test]
fn test_config_survives_serialization() {
    let config = SceneConfig::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    assert!(json.contains("\"#800080\""));
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_invalid_color_is_rejected() {
    let err = SceneConfig::from_json_str(r#"{ "plane": { "color": "purple" } }"#).unwrap_err();
    assert!(format!("{:#}", err).contains("purple"));
}

#[test]
fn test_missing_file_reports_path() {
    let err = SceneConfig::load(Path::new("missing/scene.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("missing/scene.json"));
}

#[test]
fn test_demo_scene_layout() {
    let config = SceneConfig::default();
    let demo = DemoScene::from_config(&config);
    let scene = &demo.scene;

    assert_eq!(scene.objects().len(), 3);
    assert_eq!(scene.position(demo.plane).y, -0.5);
    assert!((scene.position(demo.shadow).y - (-0.49)).abs() < 1e-6);

    match &scene.object(demo.shadow).material {
        Material::Basic(m) => {
            assert!(m.transparent);
            assert_eq!(m.alpha_map, Some(AlphaMap::Pending));
        }
        other => panic!("decal should be unlit, got {:?}", other),
    }

    // The decal is drawn after both opaque meshes
    let last = scene.draw_order().last().map(|(id, _)| id);
    assert_eq!(last, Some(demo.shadow));
}
