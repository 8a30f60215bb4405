use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::config::{CameraConfig, SceneConfig};
use crate::scene::{
    AlphaMap, AmbientLight, BasicMaterial, DirectionalLight, Geometry, Material, ObjectId,
    PointLight, Scene, SceneObject, SpotLight, StandardMaterial,
};

/// The bouncing-sphere scene and handles to the objects the frame loop drives
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub scene: Scene,
    pub sphere: ObjectId,
    pub shadow: ObjectId,
    pub plane: ObjectId,
}

impl DemoScene {
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Scene::new(
            AmbientLight {
                color: config.ambient_light.color.to_linear_rgb(),
                intensity: config.ambient_light.intensity,
            },
            DirectionalLight {
                color: config.directional_light.color.to_linear_rgb(),
                intensity: config.directional_light.intensity,
                position: Vec3::from_array(config.directional_light.position),
                target: Vec3::ZERO,
            },
            PointLight {
                color: config.point_light.color.to_linear_rgb(),
                intensity: config.point_light.intensity,
                position: Vec3::from_array(config.point_light.position),
                distance: config.point_light.distance,
                decay: config.point_light.decay,
            },
            SpotLight {
                color: config.spot_light.color.to_linear_rgb(),
                intensity: config.spot_light.intensity,
                position: Vec3::from_array(config.spot_light.position),
                target: Vec3::from_array(config.spot_light.target),
                distance: config.spot_light.distance,
                angle: config.spot_light.angle,
                decay: config.spot_light.decay,
            },
        );

        let sphere_cfg = &config.sphere;
        let sphere = scene.add(SceneObject::new(
            "sphere",
            Geometry::Sphere {
                radius: sphere_cfg.radius,
                width_segments: sphere_cfg.width_segments,
                height_segments: sphere_cfg.height_segments,
            },
            Material::Standard(StandardMaterial {
                color: sphere_cfg.color.to_linear_rgb(),
                metalness: sphere_cfg.metalness,
                roughness: sphere_cfg.roughness,
            }),
        ));

        let plane_cfg = &config.plane;
        let shadow_cfg = &config.shadow;
        let shadow = scene.add(
            SceneObject::new(
                "sphere shadow",
                Geometry::Plane {
                    width: shadow_cfg.size,
                    height: shadow_cfg.size,
                },
                Material::Basic(BasicMaterial {
                    color: shadow_cfg.color.to_linear_rgb(),
                    opacity: 1.0,
                    transparent: true,
                    alpha_map: Some(AlphaMap::Pending),
                }),
            )
            .with_rotation_x(-FRAC_PI_2)
            .with_position(Vec3::new(0.0, plane_cfg.elevation + shadow_cfg.lift, 0.0)),
        );

        let plane = scene.add(
            SceneObject::new(
                "plane",
                Geometry::Plane {
                    width: plane_cfg.size,
                    height: plane_cfg.size,
                },
                Material::Standard(StandardMaterial {
                    color: plane_cfg.color.to_linear_rgb(),
                    metalness: plane_cfg.metalness,
                    roughness: plane_cfg.roughness,
                }),
            )
            .with_rotation_x(-FRAC_PI_2)
            .with_position(Vec3::new(0.0, plane_cfg.elevation, 0.0)),
        );

        Self {
            scene,
            sphere,
            shadow,
            plane,
        }
    }
}

/// Camera placed as configured, looking at the orbit target
pub fn create_camera(config: &CameraConfig, aspect: f32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(config.fov, aspect, config.near, config.far);
    camera.position = Vec3::from_array(config.position);
    camera.target = Vec3::from_array(config.target);
    camera
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_layout() {
        let demo = DemoScene::from_config(&SceneConfig::default());
        let scene = &demo.scene;

        assert_eq!(scene.objects().len(), 3);
        assert_eq!(scene.position(demo.plane), Vec3::new(0.0, -0.5, 0.0));
        assert!((scene.position(demo.shadow).y - (-0.49)).abs() < 1e-6);
        assert!(scene.object(demo.shadow).material.is_transparent());
        assert!(!scene.object(demo.sphere).material.is_transparent());
    }

    #[test]
    fn lights_follow_config() {
        let demo = DemoScene::from_config(&SceneConfig::default());
        let scene = &demo.scene;
        assert_eq!(scene.ambient_light.intensity, 0.3);
        assert_eq!(scene.directional_light.position, Vec3::new(2.0, 2.0, -1.0));
        assert_eq!(scene.point_light.position, Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(scene.spot_light.intensity, 0.4);
        assert_eq!(scene.spot_light.distance, 10.0);
    }

    #[test]
    fn camera_starts_at_configured_position() {
        let camera = create_camera(&CameraConfig::default(), 4.0 / 3.0);
        assert_eq!(camera.position, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.aspect(), 4.0 / 3.0);
        assert!(!camera.is_projection_dirty());
    }
}
