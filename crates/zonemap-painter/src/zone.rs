//! Zone model: immutable polygon geometry plus per-zone fill state.

use zonemap_engine::coords::{IVec2, Rect, Vec2};
use zonemap_raster::{polygon, Rgba8};

use crate::config::{validate_zones, ConfigError, ZoneDef};
use crate::view::ViewTransform;

/// Index of a zone in definition order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub usize);

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FillState {
    #[default]
    Unfilled,
    Filled(Rgba8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: ZoneId,
    vertices: Vec<Vec2>,
    label: String,
    fill: FillState,
}

impl Zone {
    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Model-space vertices in definition order.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn fill(&self) -> FillState {
        self.fill
    }

    /// Vertices in integer screen pixels under `view`.
    pub fn screen_polygon(&self, view: &ViewTransform) -> Vec<IVec2> {
        self.vertices.iter().map(|&v| view.to_screen_px(v)).collect()
    }

    /// Mean of the vertices.
    ///
    /// This is the vertex average, not the area centroid; the two agree for
    /// the rectangles and regular polygons zones are usually drawn as.
    pub fn centroid(&self) -> Vec2 {
        let n = self.vertices.len().max(1) as f32;
        let sum = self
            .vertices
            .iter()
            .fold(Vec2::zero(), |acc, &v| acc + v);
        sum / n
    }

    /// Hit-test against the same transformed polygon that is drawn; outline
    /// pixels count as inside. Does not touch any raster.
    pub fn contains_screen_point(&self, view: &ViewTransform, p: IVec2) -> bool {
        polygon::contains_point(&self.screen_polygon(view), p)
    }
}

/// All zones of a session, in definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneSet {
    zones: Vec<Zone>,
}

impl ZoneSet {
    /// Builds unfilled zones from definitions, rejecting degenerate ones.
    pub fn from_defs(defs: &[ZoneDef]) -> Result<Self, ConfigError> {
        validate_zones(defs)?;

        let zones = defs
            .iter()
            .enumerate()
            .map(|(i, def)| Zone {
                id: ZoneId(i),
                vertices: def.vertices.clone(),
                label: def.label.clone(),
                fill: FillState::Unfilled,
            })
            .collect();
        Ok(Self { zones })
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// First zone, in definition order, whose screen polygon contains `p`.
    pub fn hit_test(&self, view: &ViewTransform, p: IVec2) -> Option<ZoneId> {
        self.zones
            .iter()
            .find(|z| z.contains_screen_point(view, p))
            .map(Zone::id)
    }

    /// Screen-space bounding box of a zone's (untruncated) transformed vertices.
    pub fn screen_bounds(&self, id: ZoneId, view: &ViewTransform) -> Option<Rect> {
        let zone = self.get(id)?;
        Rect::bounding(zone.vertices.iter().map(|&v| view.to_screen(v)))
    }

    pub(crate) fn mark_filled(&mut self, id: ZoneId, color: Rgba8) {
        if let Some(zone) = self.zones.get_mut(id.0) {
            zone.fill = FillState::Filled(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PainterConfig;

    fn default_zones() -> ZoneSet {
        ZoneSet::from_defs(&PainterConfig::default().zones).unwrap()
    }

    #[test]
    fn zones_start_unfilled_in_definition_order() {
        let zones = default_zones();
        let labels: Vec<_> = zones.iter().map(Zone::label).collect();
        assert_eq!(labels, ["Residential", "Commercial", "Industrial"]);
        assert!(zones.iter().all(|z| z.fill() == FillState::Unfilled));
        assert_eq!(zones.get(ZoneId(2)).map(Zone::id), Some(ZoneId(2)));
    }

    #[test]
    fn degenerate_definition_is_rejected() {
        let defs = [ZoneDef::new("Sliver", [(0.0, 0.0), (5.0, 5.0)])];
        assert_eq!(
            ZoneSet::from_defs(&defs),
            Err(ConfigError::DegenerateZone { index: 0, vertices: 2 })
        );
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let zones = default_zones();
        assert_eq!(zones.get(ZoneId(0)).unwrap().centroid(), Vec2::new(200.0, 200.0));

        let tri = ZoneSet::from_defs(&[ZoneDef::new("Tri", [(0.0, 0.0), (30.0, 0.0), (0.0, 60.0)])]).unwrap();
        assert_eq!(tri.get(ZoneId(0)).unwrap().centroid(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn hit_test_finds_each_zone() {
        let zones = default_zones();
        let view = ViewTransform::default();
        assert_eq!(zones.hit_test(&view, IVec2::new(200, 200)), Some(ZoneId(0)));
        assert_eq!(zones.hit_test(&view, IVec2::new(500, 200)), Some(ZoneId(1)));
        assert_eq!(zones.hit_test(&view, IVec2::new(150, 550)), Some(ZoneId(2)));
        assert_eq!(zones.hit_test(&view, IVec2::new(350, 350)), None);
        // Outline pixels belong to the zone.
        assert_eq!(zones.hit_test(&view, IVec2::new(100, 100)), Some(ZoneId(0)));
    }

    #[test]
    fn hit_test_follows_the_view() {
        let zones = default_zones();
        let mut view = ViewTransform::default();
        view.pan_by(IVec2::new(50, -20));
        assert_eq!(zones.hit_test(&view, IVec2::new(120, 150)), None);
        assert_eq!(zones.hit_test(&view, IVec2::new(160, 90)), Some(ZoneId(0)));
    }

    #[test]
    fn overlapping_zones_resolve_to_first_defined() {
        let defs = [
            ZoneDef::rect("Under", 0.0, 0.0, 100.0, 100.0),
            ZoneDef::rect("Over", 50.0, 50.0, 100.0, 100.0),
        ];
        let zones = ZoneSet::from_defs(&defs).unwrap();
        let view = ViewTransform::default();
        assert_eq!(zones.hit_test(&view, IVec2::new(75, 75)), Some(ZoneId(0)));
        assert_eq!(zones.hit_test(&view, IVec2::new(125, 125)), Some(ZoneId(1)));
    }

    #[test]
    fn bounds_scale_with_zoom() {
        let zones = default_zones();
        let mut view = ViewTransform::default();
        let before = zones.screen_bounds(ZoneId(0), &view).unwrap();
        view.set_zoom(1.21);
        let after = zones.screen_bounds(ZoneId(0), &view).unwrap();
        assert!((after.width() / before.width() - 1.21).abs() < 1e-4);
        assert!((after.height() / before.height() - 1.21).abs() < 1e-4);
        assert!(zones.screen_bounds(ZoneId(9), &view).is_none());
    }

    #[test]
    fn screen_polygon_truncates() {
        let zones = default_zones();
        let mut view = ViewTransform::default();
        view.set_zoom(1.21);
        let poly = zones.get(ZoneId(0)).unwrap().screen_polygon(&view);
        assert_eq!(poly[0], IVec2::new(121, 121));
        assert_eq!(poly[2], IVec2::new(363, 363));
    }

    #[test]
    fn mark_filled_updates_one_zone() {
        let mut zones = default_zones();
        zones.mark_filled(ZoneId(1), Rgba8::GREEN);
        assert_eq!(zones.get(ZoneId(1)).unwrap().fill(), FillState::Filled(Rgba8::GREEN));
        assert_eq!(zones.get(ZoneId(0)).unwrap().fill(), FillState::Unfilled);
    }
}
