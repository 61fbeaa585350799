//! Unit tests for hos-route.

#[cfg(test)]
mod segment_tests {
    use crate::{Route, RouteSegment, METERS_PER_MILE};

    #[test]
    fn pickup_and_delivery_split() {
        let route = Route::new(vec![
            RouteSegment::new(10.0 * METERS_PER_MILE, 600.0),
            RouteSegment::new(25.0 * METERS_PER_MILE, 1500.0),
            RouteSegment::new(15.0 * METERS_PER_MILE, 900.0),
        ]);
        assert!((route.pickup_leg().unwrap().miles() - 10.0).abs() < 1e-9);
        assert_eq!(route.delivery_legs().len(), 2);
        assert!((route.delivery_miles() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn single_segment_has_no_delivery_legs() {
        let route = Route::new(vec![RouteSegment::new(1000.0, 60.0)]);
        assert!(route.delivery_legs().is_empty());
        assert_eq!(route.delivery_miles(), 0.0);
    }

    #[test]
    fn empty_route() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert!(route.pickup_leg().is_none());
        assert!(route.delivery_legs().is_empty());
    }

    #[test]
    fn malformed_segments_detected() {
        let route = Route::new(vec![
            RouteSegment::new(1000.0, 60.0),
            RouteSegment::new(-5.0, 60.0),
            RouteSegment::new(1000.0, f64::NAN),
        ]);
        let (idx, seg) = route.first_malformed().unwrap();
        assert_eq!(idx, 1);
        assert_eq!(seg.distance_meters, -5.0);
        assert!(Route::new(vec![RouteSegment::default()]).first_malformed().is_none());
    }
}

#[cfg(test)]
mod summary_tests {
    use crate::{LegSummary, Route, RouteSegment, RouteSummary, round2, summarize};

    fn sample() -> Route {
        Route::new(vec![
            RouteSegment::new(16_093.4, 654.0),
            RouteSegment::new(64_373.6, 2_640.0),
        ])
    }

    #[test]
    fn totals_in_miles_and_hours() {
        let s = summarize(&sample());
        assert!((s.total_miles - 50.0).abs() < 1e-9, "got {}", s.total_miles);
        assert!((s.estimated_drive_hours - 0.915).abs() < 1e-9);
    }

    #[test]
    fn summarizing_twice_is_identical() {
        let route = sample();
        let before = route.clone();
        assert_eq!(summarize(&route), summarize(&route));
        assert_eq!(route, before);
    }

    #[test]
    fn empty_route_sums_to_zero() {
        assert_eq!(summarize(&Route::empty()), RouteSummary::default());
    }

    #[test]
    fn rounding_only_at_boundary() {
        let s = RouteSummary { total_miles: 123.456_7, estimated_drive_hours: 2.004_9 };
        let r = s.rounded();
        assert_eq!(r.total_miles, 123.46);
        assert_eq!(r.estimated_drive_hours, 2.0);
        assert_eq!(round2(0.125_000_1), 0.13);
    }

    #[test]
    fn leg_summary_in_km() {
        let leg = LegSummary::of(&RouteSegment::new(16_093.4, 654.0));
        assert_eq!(leg.distance_km, 16.09);
        assert_eq!(leg.duration_hours, 0.18);
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::{RouteError, load_ors_geojson, load_segments_csv};

    const ORS_BODY: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [
                    { "distance": 16093.4, "duration": 654.5, "steps": [] },
                    { "distance": 64373.6, "duration": 2618.2, "steps": [] }
                ],
                "summary": { "distance": 80467.0, "duration": 3272.7 }
            },
            "geometry": { "type": "LineString", "coordinates": [[-88.04, 30.69], [-87.5, 30.9]] }
        }],
        "bbox": [-88.04, 30.69, -87.5, 30.9]
    }"#;

    #[test]
    fn ors_segments_in_order() {
        let route = load_ors_geojson(Cursor::new(ORS_BODY)).unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route.segments[0].distance_meters, 16093.4);
        assert_eq!(route.segments[1].duration_seconds, 2618.2);
    }

    #[test]
    fn ors_without_features_is_empty() {
        let route = load_ors_geojson(Cursor::new(r#"{ "type": "FeatureCollection", "features": [] }"#)).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn ors_feature_without_segments_is_empty() {
        let route = load_ors_geojson(Cursor::new(r#"{ "features": [ { "properties": {} } ] }"#)).unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn ors_error_body_rejected() {
        let body = r#"{ "error": { "code": 2010, "message": "Could not find routable point" } }"#;
        let err = load_ors_geojson(Cursor::new(body)).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
        assert!(err.to_string().contains("2010"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = load_ors_geojson(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, RouteError::Json(_)));
    }

    #[test]
    fn csv_rows_in_order() {
        let csv = "distance_meters,duration_seconds\n16093.4,654.5\n64373.6,2618.2\n";
        let route = load_segments_csv(Cursor::new(csv)).unwrap();
        assert_eq!(route.len(), 2);
        assert_eq!(route.segments[1].distance_meters, 64373.6);
    }

    #[test]
    fn csv_bad_number_is_csv_error() {
        let csv = "distance_meters,duration_seconds\nfar,654.5\n";
        let err = load_segments_csv(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RouteError::Csv(_)));
    }
}
