use serde::Deserialize;

use crate::chart::ChartPoint;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AspectDefinition {
    pub name: String,
    pub degree: f32,
    pub orbit: f32,
    pub color: String,
}

impl AspectDefinition {
    fn new(name: &str, degree: f32, orbit: f32, color: &str) -> Self {
        Self {
            name: name.to_string(),
            degree,
            orbit,
            color: color.to_string(),
        }
    }
}

pub fn default_aspects() -> Vec<AspectDefinition> {
    vec![
        AspectDefinition::new("conjunction", 0.0, 10.0, "transparent"),
        AspectDefinition::new("sextile", 60.0, 6.0, "#1E90FF"),
        AspectDefinition::new("square", 90.0, 8.0, "#FF4500"),
        AspectDefinition::new("trine", 120.0, 8.0, "#27AE60"),
        AspectDefinition::new("opposition", 180.0, 10.0, "#27AE60"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aspect {
    pub from: String,
    pub to: String,
    pub name: String,
    /// Actual separation of the two points, 0..=180.
    pub separation: f32,
    /// Distance from the exact aspect angle.
    pub precision: f32,
    pub color: String,
}

/// Shortest distance between two ecliptic degrees, in `0..=180`.
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Every pair of points whose separation falls within an aspect's orb.
/// When orbs overlap, the first matching definition wins.
pub fn find_aspects(points: &[ChartPoint], definitions: &[AspectDefinition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for (idx, from) in points.iter().enumerate() {
        for to in &points[idx + 1..] {
            let separation = angular_distance(from.degree, to.degree);
            let found = definitions
                .iter()
                .find(|def| (separation - def.degree).abs() <= def.orbit);
            if let Some(def) = found {
                aspects.push(Aspect {
                    from: from.name.clone(),
                    to: to.name.clone(),
                    name: def.name.clone(),
                    separation,
                    precision: (separation - def.degree).abs(),
                    color: def.color.clone(),
                });
            }
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, degree: f32) -> ChartPoint {
        ChartPoint {
            name: name.to_string(),
            degree,
            retrograde: false,
        }
    }

    #[test]
    fn distance_wraps_around_aries() {
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(10.0, 350.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(90.0, 90.0), 0.0);
    }

    #[test]
    fn finds_aspects_within_orb() {
        let points = vec![
            point("Sun", 10.0),
            point("Moon", 101.0),
            point("Mars", 190.5),
            point("Venus", 45.0),
        ];
        let aspects = find_aspects(&points, &default_aspects());
        let names: Vec<(&str, &str, &str)> = aspects
            .iter()
            .map(|a| (a.from.as_str(), a.to.as_str(), a.name.as_str()))
            .collect();
        assert!(names.contains(&("Sun", "Moon", "square")));
        assert!(names.contains(&("Sun", "Mars", "opposition")));
        assert!(names.contains(&("Moon", "Mars", "square")));
        assert!(!names.iter().any(|(a, b, _)| *a == "Sun" && *b == "Venus"));
        let sun_moon = aspects.iter().find(|a| a.to == "Moon" && a.from == "Sun").unwrap();
        assert!((sun_moon.precision - 1.0).abs() < 1e-4);
    }

    #[test]
    fn first_matching_definition_wins() {
        let defs = vec![
            AspectDefinition::new("wide", 60.0, 30.0, "#000"),
            AspectDefinition::new("sextile", 60.0, 6.0, "#111"),
        ];
        let aspects = find_aspects(&[point("A", 0.0), point("B", 61.0)], &defs);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].name, "wide");
    }
}
