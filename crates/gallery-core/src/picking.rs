//! Ray-based hit testing against shelf figures.
//!
//! The engine only needs "which targets does a ray through this NDC point
//! cross, nearest first". `RayCaster` is that seam; `ShelfCaster` answers it
//! from per-target hit boxes, testing each box in its pivot-local frame so a
//! figure halfway through its fall is hit where it is drawn.

use crate::camera::{Camera, Ray};
use crate::target::{Target, TargetId};
use fnv::FnvHashMap;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub id: TargetId,
    /// Distance from the ray origin along the (unit) ray.
    pub distance: f32,
}

/// Hits sorted nearest-first.
pub type RayHits = SmallVec<[RayHit; 4]>;

pub trait RayCaster {
    fn cast(&self, ndc: Vec2, targets: &[Target]) -> RayHits;
}

/// Box-shaped hit volume anchored at a target's pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub pivot: Vec3,
    /// Box center relative to the pivot in the upright pose.
    pub center_offset: Vec3,
    pub half_extents: Vec3,
}

impl HitBox {
    /// Radius of a sphere around the pivot that contains the box in any pose.
    #[inline]
    pub fn bounding_radius(&self) -> f32 {
        self.center_offset.length() + self.half_extents.length()
    }

    /// World transform of the pivot for a given fall rotation.
    #[inline]
    pub fn pivot_transform(&self, rotation: f32) -> Mat4 {
        Mat4::from_translation(self.pivot) * Mat4::from_rotation_x(rotation)
    }

    /// Distance along `ray` to the box in its rotated pose.
    pub fn intersect(&self, ray: &Ray, rotation: f32) -> Option<f32> {
        ray_sphere(ray.origin, ray.dir, self.pivot, self.bounding_radius())?;
        let to_local = self.pivot_transform(rotation).inverse();
        let origin = to_local.transform_point3(ray.origin);
        let dir = to_local.transform_vector3(ray.dir);
        let min = self.center_offset - self.half_extents;
        let max = self.center_offset + self.half_extents;
        ray_aabb(origin, dir, min, max)
    }
}

/// Near intersection of a ray with a sphere; 0 when the origin is inside.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let t_far = -b + root;
    if t_far < 0.0 {
        return None;
    }
    Some((-b - root).max(0.0))
}

/// Slab test. Returns the entry distance, or 0 when the origin is inside the box.
pub fn ray_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-8 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(t_near.max(0.0))
}

/// Geometry-backed caster over the shelf figures.
#[derive(Clone, Debug)]
pub struct ShelfCaster {
    pub camera: Camera,
    boxes: FnvHashMap<TargetId, HitBox>,
}

impl ShelfCaster {
    pub fn new(camera: Camera, boxes: impl IntoIterator<Item = (TargetId, HitBox)>) -> Self {
        Self {
            camera,
            boxes: boxes.into_iter().collect(),
        }
    }

    pub fn hit_box(&self, id: TargetId) -> Option<&HitBox> {
        self.boxes.get(&id)
    }

    pub fn cast_ray(&self, ray: &Ray, targets: &[Target]) -> RayHits {
        let mut hits: RayHits = targets
            .iter()
            .filter_map(|t| {
                let hb = self.boxes.get(&t.id)?;
                hb.intersect(ray, t.rotation()).map(|distance| RayHit {
                    id: t.id,
                    distance,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl RayCaster for ShelfCaster {
    fn cast(&self, ndc: Vec2, targets: &[Target]) -> RayHits {
        let ray = self.camera.ray_through_ndc(ndc);
        self.cast_ray(&ray, targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn unit_box_at(pivot: Vec3) -> HitBox {
        HitBox {
            pivot,
            center_offset: Vec3::new(0.0, 0.5, 0.0),
            half_extents: Vec3::splat(0.5),
        }
    }

    fn forward_ray(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 10.0),
            dir: Vec3::NEG_Z,
        }
    }

    #[test]
    fn ray_sphere_inside_reports_zero() {
        let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::ZERO, 2.0);
        assert_eq!(t, Some(0.0));
        assert_eq!(ray_sphere(Vec3::new(5.0, 0.0, 0.0), Vec3::X, Vec3::ZERO, 1.0), None);
    }

    #[test]
    fn ray_aabb_entry_distance() {
        let t = ray_aabb(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(t, Some(9.0));
        let miss = ray_aabb(
            Vec3::new(3.0, 0.0, 10.0),
            Vec3::NEG_Z,
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert_eq!(miss, None);
    }

    #[test]
    fn upright_box_hit_and_fallen_box_dodges() {
        let hb = unit_box_at(Vec3::ZERO);
        // Aim at the top half of the figure.
        let ray = forward_ray(0.0, 0.8);
        assert!(hb.intersect(&ray, 0.0).is_some());
        // Tipped flat backwards, the figure no longer reaches y = 0.8.
        assert_eq!(hb.intersect(&ray, -FRAC_PI_2), None);
        // ...but it now lies along -z on the shelf.
        let low = forward_ray(0.0, 0.2);
        let t = hb.intersect(&low, -FRAC_PI_2).unwrap();
        assert!((t - 10.0).abs() < 1e-4);
    }

    #[test]
    fn caster_sorts_nearest_first() {
        let targets = vec![
            Target::new(TargetId(0), Vec3::new(0.0, 0.0, -3.0), 1, 20),
            Target::new(TargetId(1), Vec3::new(0.0, 0.0, 0.0), 0, 10),
            Target::new(TargetId(2), Vec3::new(4.0, 0.0, 0.0), 0, 10),
        ];
        let caster = ShelfCaster::new(
            Camera::default(),
            targets.iter().map(|t| (t.id, unit_box_at(t.position))),
        );
        let hits = caster.cast_ray(&forward_ray(0.0, 0.5), &targets);
        let ids: Vec<TargetId> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![TargetId(1), TargetId(0)]);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn targets_without_geometry_are_skipped() {
        let targets = vec![Target::new(TargetId(9), Vec3::ZERO, 0, 10)];
        let caster = ShelfCaster::new(Camera::default(), std::iter::empty());
        assert!(caster.cast_ray(&forward_ray(0.0, 0.5), &targets).is_empty());
    }
}
