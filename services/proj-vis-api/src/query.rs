//! Grid request parsing.

use std::collections::HashMap;

use grid_sampler::{generate_page, TransformedPoint};
use proj_common::{GridSpec, PageRequest, ProjVisError, ProjVisResult};
use projection::build_transform;

/// A fully parsed grid request.
#[derive(Debug, Clone, PartialEq)]
pub struct GridQuery {
    pub grid: GridSpec,
    pub page: PageRequest,
    /// Source CRS definition, unresolved.
    pub proj_from: String,
    /// Destination CRS definition, unresolved.
    pub proj_to: String,
}

impl GridQuery {
    /// Parse the flat query-string mapping of a request.
    ///
    /// `x`/`y`, when present, collapse the corresponding axis to that single
    /// value. Parameter names from the first version of the service
    /// (`proj`, `minLon`, `minLat`, `maxLon`, `maxLat`) are honored when the
    /// current name is absent.
    pub fn from_params(params: &HashMap<String, String>, default_crs: &str) -> ProjVisResult<Self> {
        let min_x = parse_f64(params, "minX", Some("minLon"), 0.0)?;
        let min_y = parse_f64(params, "minY", Some("minLat"), 0.0)?;
        let max_x = parse_f64(params, "maxX", Some("maxLon"), 0.0)?;
        let max_y = parse_f64(params, "maxY", Some("maxLat"), 0.0)?;
        let step = parse_f64(params, "step", None, 1.0)?;
        let offset = parse_i64(params, "offset", 0)?;
        let limit = parse_i64(params, "limit", 1)?;

        let (min_x, max_x) = match parse_optional_f64(params, "x", None)? {
            Some(x) => (x, x),
            None => (min_x, max_x),
        };
        let (min_y, max_y) = match parse_optional_f64(params, "y", None)? {
            Some(y) => (y, y),
            None => (min_y, max_y),
        };

        let grid = GridSpec::new(min_x, min_y, max_x, max_y, step)?;

        let proj_from = lookup(params, "projFrom", None)
            .unwrap_or(default_crs)
            .to_string();
        let proj_to = lookup(params, "projTo", Some("proj"))
            .unwrap_or(default_crs)
            .to_string();

        Ok(Self {
            grid,
            page: PageRequest::new(offset, limit),
            proj_from,
            proj_to,
        })
    }

    /// Build the transform and sample the requested page.
    ///
    /// Transform construction fails before any point is generated.
    pub fn execute(&self) -> ProjVisResult<Vec<TransformedPoint>> {
        let transform = build_transform(&self.proj_from, &self.proj_to)?;
        Ok(generate_page(&self.grid, &transform, self.page))
    }
}

fn lookup<'a>(
    params: &'a HashMap<String, String>,
    name: &str,
    legacy: Option<&str>,
) -> Option<&'a str> {
    params
        .get(name)
        .or_else(|| legacy.and_then(|legacy| params.get(legacy)))
        .map(String::as_str)
}

fn parse_optional_f64(
    params: &HashMap<String, String>,
    name: &str,
    legacy: Option<&str>,
) -> ProjVisResult<Option<f64>> {
    let Some(raw) = lookup(params, name, legacy) else {
        return Ok(None);
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ProjVisError::invalid_parameter(name, format!("'{}' is not a number", raw)))?;

    if !value.is_finite() {
        return Err(ProjVisError::invalid_parameter(
            name,
            format!("'{}' is not a finite number", raw),
        ));
    }

    Ok(Some(value))
}

fn parse_f64(
    params: &HashMap<String, String>,
    name: &str,
    legacy: Option<&str>,
    default: f64,
) -> ProjVisResult<f64> {
    Ok(parse_optional_f64(params, name, legacy)?.unwrap_or(default))
}

fn parse_i64(params: &HashMap<String, String>, name: &str, default: i64) -> ProjVisResult<i64> {
    match params.get(name) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ProjVisError::invalid_parameter(name, format!("'{}' is not an integer", raw))
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let query = GridQuery::from_params(&HashMap::new(), "EPSG:4326").unwrap();
        assert_eq!(query.grid, GridSpec::new(0.0, 0.0, 0.0, 0.0, 1.0).unwrap());
        assert_eq!(query.page, PageRequest { offset: 0, limit: 1 });
        assert_eq!(query.proj_from, "EPSG:4326");
        assert_eq!(query.proj_to, "EPSG:4326");
    }

    #[test]
    fn test_full_rectangle() {
        let query = GridQuery::from_params(
            &params(&[
                ("minX", "-10"),
                ("minY", "-5.5"),
                ("maxX", "10"),
                ("maxY", " 5.5 "),
                ("step", "0.5"),
                ("offset", "20"),
                ("limit", "100"),
                ("projFrom", "EPSG:4326"),
                ("projTo", "+proj=utm +zone=32"),
            ]),
            "EPSG:4326",
        )
        .unwrap();

        assert_eq!(query.grid.min_x, -10.0);
        assert_eq!(query.grid.max_y, 5.5);
        assert_eq!(query.grid.step, 0.5);
        assert_eq!(query.page, PageRequest { offset: 20, limit: 100 });
        assert_eq!(query.proj_to, "+proj=utm +zone=32");
    }

    #[test]
    fn test_point_override() {
        let query = GridQuery::from_params(
            &params(&[
                ("x", "5"),
                ("y", "10"),
                ("minX", "-100"),
                ("maxX", "100"),
                ("minY", "-50"),
                ("maxY", "50"),
            ]),
            "EPSG:4326",
        )
        .unwrap();

        assert_eq!(query.grid.total(), 1);
        assert_eq!(query.grid.point_at(0), Some((5.0, 10.0)));
    }

    #[test]
    fn test_x_only_override_keeps_y_range() {
        let query = GridQuery::from_params(
            &params(&[("x", "3"), ("minY", "0"), ("maxY", "2")]),
            "EPSG:4326",
        )
        .unwrap();
        assert_eq!(query.grid.x_count(), 1);
        assert_eq!(query.grid.y_count(), 3);
    }

    #[test]
    fn test_legacy_names() {
        let query = GridQuery::from_params(
            &params(&[
                ("minLon", "-180"),
                ("minLat", "-90"),
                ("maxLon", "180"),
                ("maxLat", "90"),
                ("proj", "+proj=geos +h=35785831.0 +lon_0=-60 +sweep=y"),
            ]),
            "EPSG:4326",
        )
        .unwrap();
        assert_eq!(query.grid.min_x, -180.0);
        assert_eq!(query.grid.max_y, 90.0);
        assert_eq!(query.proj_to, "+proj=geos +h=35785831.0 +lon_0=-60 +sweep=y");
    }

    #[test]
    fn test_current_name_wins_over_legacy() {
        let query = GridQuery::from_params(
            &params(&[("minX", "1"), ("minLon", "99"), ("projTo", "EPSG:3857"), ("proj", "x")]),
            "EPSG:4326",
        )
        .unwrap();
        assert_eq!(query.grid.min_x, 1.0);
        assert_eq!(query.proj_to, "EPSG:3857");
    }

    #[test]
    fn test_clamps_offset_and_limit() {
        let query =
            GridQuery::from_params(&params(&[("offset", "-4"), ("limit", "0")]), "EPSG:4326")
                .unwrap();
        assert_eq!(query.page, PageRequest { offset: 0, limit: 1 });
    }

    #[test]
    fn test_invalid_numbers() {
        for (name, value) in [
            ("minX", "abc"),
            ("step", ""),
            ("step", "0"),
            ("step", "-1"),
            ("x", "NaN"),
            ("maxY", "inf"),
            ("offset", "1.5"),
            ("limit", "ten"),
        ] {
            let result = GridQuery::from_params(&params(&[(name, value)]), "EPSG:4326");
            match result {
                Err(ProjVisError::InvalidParameter { param, .. }) => assert_eq!(param, name),
                other => panic!("{}={} gave {:?}", name, value, other),
            }
        }
    }

    #[test]
    fn test_execute_identity() {
        let query = GridQuery::from_params(
            &params(&[("maxX", "2"), ("maxY", "2"), ("limit", "9")]),
            "EPSG:4326",
        )
        .unwrap();
        let points = query.execute().unwrap();
        assert_eq!(points.len(), 9);
        assert_eq!(points[4], TransformedPoint::Valid { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_execute_bad_projection_fails_whole_request() {
        let query = GridQuery::from_params(
            &params(&[("maxX", "2"), ("limit", "3"), ("projFrom", "+proj=nonsense")]),
            "EPSG:4326",
        )
        .unwrap();
        assert!(matches!(
            query.execute(),
            Err(ProjVisError::UnsupportedProjection { .. })
        ));
    }
}
