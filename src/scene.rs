use glam::{Mat3, Mat4, Quat, Vec3};

use crate::types::{LightsUniform, ObjectUniform};

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Light arriving from `position` toward `target`, without falloff
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub distance: f32,
    pub decay: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub distance: f32,
    pub angle: f32,
    pub decay: f32,
}

/// Lit surface with a metallic-roughness response
#[derive(Debug, Clone, PartialEq)]
pub struct StandardMaterial {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
}

/// Availability of a material's alpha map texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMap {
    /// Still loading; sampled as fully transparent
    Pending,
    Loaded,
    /// Failed to load; the material renders as if it had no alpha map
    Unavailable,
}

/// Unlit, optionally transparent surface
#[derive(Debug, Clone, PartialEq)]
pub struct BasicMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
    pub alpha_map: Option<AlphaMap>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    Standard(StandardMaterial),
    Basic(BasicMaterial),
}

impl Material {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Material::Basic(basic) if basic.transparent)
    }
}

/// Shape of a mesh, resolved to vertices by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Quat,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation_x(mut self, angle: f32) -> Self {
        self.rotation = Quat::from_rotation_x(angle);
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    pub fn to_uniform(&self) -> ObjectUniform {
        let model = self.model_matrix();
        let normal_matrix = Mat4::from_mat3(Mat3::from_mat4(model).inverse().transpose());

        let (color, params) = match &self.material {
            Material::Standard(m) => (
                [m.color[0], m.color[1], m.color[2], 1.0],
                [m.metalness, m.roughness, 1.0, 0.0],
            ),
            Material::Basic(m) => {
                let alpha_map = match m.alpha_map {
                    Some(AlphaMap::Loaded) | Some(AlphaMap::Pending) => 1.0,
                    Some(AlphaMap::Unavailable) | None => 0.0,
                };
                let opacity = if m.transparent { m.opacity } else { 1.0 };
                (
                    [m.color[0], m.color[1], m.color[2], opacity],
                    [0.0, 1.0, 0.0, alpha_map],
                )
            }
        };

        ObjectUniform {
            model: model.to_cols_array_2d(),
            normal_matrix: normal_matrix.to_cols_array_2d(),
            color,
            params,
        }
    }
}

/// Handle to an object stored in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Position of the object in [`Scene::objects`]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lights plus a flat list of meshes
#[derive(Debug, Clone)]
pub struct Scene {
    pub ambient_light: AmbientLight,
    pub directional_light: DirectionalLight,
    pub point_light: PointLight,
    pub spot_light: SpotLight,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(
        ambient_light: AmbientLight,
        directional_light: DirectionalLight,
        point_light: PointLight,
        spot_light: SpotLight,
    ) -> Self {
        Self {
            ambient_light,
            directional_light,
            point_light,
            spot_light,
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects paired with their handles, opaque ones first
    pub fn draw_order(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        let opaque = self.iter_ids().filter(|(_, o)| !o.material.is_transparent());
        let transparent = self.iter_ids().filter(|(_, o)| o.material.is_transparent());
        opaque.chain(transparent)
    }

    fn iter_ids(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn object(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.0]
    }

    pub fn object_mut(&mut self, id: ObjectId) -> &mut SceneObject {
        &mut self.objects[id.0]
    }

    pub fn position(&self, id: ObjectId) -> Vec3 {
        self.object(id).position
    }

    pub fn set_position(&mut self, id: ObjectId, position: Vec3) {
        self.object_mut(id).position = position;
    }

    /// Opacity of a basic material; standard materials are always opaque
    pub fn opacity(&self, id: ObjectId) -> f32 {
        match &self.object(id).material {
            Material::Basic(m) => m.opacity,
            Material::Standard(_) => 1.0,
        }
    }

    pub fn set_opacity(&mut self, id: ObjectId, opacity: f32) {
        if let Material::Basic(m) = &mut self.object_mut(id).material {
            m.opacity = opacity;
        }
    }

    /// Borrow the tunable lights and all objects at once
    pub fn split_mut(&mut self) -> (&mut AmbientLight, &mut DirectionalLight, &mut [SceneObject]) {
        (
            &mut self.ambient_light,
            &mut self.directional_light,
            &mut self.objects,
        )
    }

    pub fn standard_material_mut(&mut self, id: ObjectId) -> Option<&mut StandardMaterial> {
        match &mut self.object_mut(id).material {
            Material::Standard(m) => Some(m),
            Material::Basic(_) => None,
        }
    }

    /// Update the alpha map state of every material that uses one
    pub fn set_alpha_map_state(&mut self, state: AlphaMap) {
        for object in &mut self.objects {
            if let Material::Basic(BasicMaterial { alpha_map: Some(slot), .. }) = &mut object.material {
                *slot = state;
            }
        }
    }

    pub fn lights_uniform(&self) -> LightsUniform {
        let scaled = |color: [f32; 3], intensity: f32, w: f32| {
            [color[0] * intensity, color[1] * intensity, color[2] * intensity, w]
        };

        let ambient = &self.ambient_light;
        let directional = &self.directional_light;
        let point = &self.point_light;
        let spot = &self.spot_light;

        let to_light = (directional.position - directional.target).normalize_or_zero();
        let spot_direction = (spot.target - spot.position).normalize_or_zero();

        LightsUniform {
            ambient: scaled(ambient.color, ambient.intensity, 0.0),
            directional_direction: to_light.extend(0.0).to_array(),
            directional_color: scaled(directional.color, directional.intensity, 0.0),
            point_position: point.position.extend(point.distance).to_array(),
            point_color: scaled(point.color, point.intensity, point.decay),
            spot_position: spot.position.extend(spot.distance).to_array(),
            spot_direction: spot_direction.extend(spot.angle.cos()).to_array(),
            spot_color: scaled(spot.color, spot.intensity, spot.decay),
        }
    }
}
