//! Unit tests for hos-core primitives.

#[cfg(test)]
mod span {
    use crate::Span;

    #[test]
    fn whole_minutes_are_exact() {
        assert_eq!(Span::from_minutes(45).as_millis(), 2_700_000);
        assert_eq!(Span::from_minutes(90), Span::from_hours_f64(1.5));
        assert_eq!(Span::from_minutes(30).as_minutes_f64(), 30.0);
    }

    #[test]
    fn fractional_hours_round_to_millis() {
        // 10 mi at 55 mph = 0.181818… h
        let s = Span::from_hours_f64(10.0 / 55.0);
        assert_eq!(s.as_millis(), 654_545);
    }

    #[test]
    fn repeated_sums_do_not_drift() {
        let mut total = Span::ZERO;
        for _ in 0..1_000 {
            total += Span::from_minutes(45);
        }
        assert_eq!(total, Span::from_minutes(45_000));
        assert_eq!(total.as_hours_f64(), 750.0);
    }

    #[test]
    fn saturating_sub_floors_at_zero() {
        let a = Span::from_hours(2);
        let b = Span::from_hours(3);
        assert_eq!(a.saturating_sub(b), Span::ZERO);
        assert_eq!(b.saturating_sub(a), Span::from_hours(1));
        assert_eq!(a - b, Span::from_hours(-1));
    }

    #[test]
    fn addition_saturates() {
        let max = Span(i64::MAX);
        assert_eq!(max + Span::from_hours(1), max);
        let mut total = Span::from_hours_f64(1e300);
        total += Span::from_minutes(30);
        assert_eq!(total, max);
    }

    #[test]
    fn display() {
        assert_eq!(Span::from_minutes(90).to_string(), "1:30");
        assert_eq!(Span::from_hours(34).to_string(), "34:00");
        assert_eq!(Span::from_hours_f64(10.0 / 55.0).to_string(), "0:11");
    }
}

#[cfg(test)]
mod clock {
    use chrono::{TimeZone, Utc};

    use crate::{HosError, SimClock, Span};

    #[test]
    fn advance_moves_now() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0).unwrap();
        let mut clock = SimClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Span::from_minutes(30)).unwrap();
        clock.advance(Span::from_hours(10)).unwrap();
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 4, 16, 30, 0).unwrap());
        assert_eq!(clock.elapsed, Span::from_minutes(630));
    }

    #[test]
    fn display_shows_timestamp_and_offset() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0).unwrap();
        let mut clock = SimClock::new(start);
        clock.advance(Span::from_minutes(75)).unwrap();
        assert_eq!(clock.to_string(), "2024-03-04T07:15:00Z (+1:15)");
    }

    #[test]
    fn advance_past_representable_range_fails() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0).unwrap();
        let mut clock = SimClock::new(start);
        clock.advance(Span::from_hours(1)).unwrap();

        let huge = Span::from_hours_f64(1e16 / 1609.34 / 55.0);
        let err = clock.advance(huge).unwrap_err();
        assert_eq!(err, HosError::TimeOutOfRange(Span::from_hours(1) + huge));
        assert_eq!(clock.elapsed, Span::from_hours(1));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 4, 7, 0, 0).unwrap());
    }

    #[test]
    fn saturated_span_is_out_of_range() {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 6, 0, 0).unwrap();
        let mut clock = SimClock::new(start);
        assert!(clock.checked_at(Span::from_hours(1)).is_some());
        assert!(clock.checked_at(Span(i64::MAX)).is_none());
        assert!(clock.advance(Span::from_hours_f64(1e300)).is_err());
        assert_eq!(clock.elapsed, Span::ZERO);
    }
}

#[cfg(test)]
mod status {
    use crate::DutyStatus;

    #[test]
    fn wire_names() {
        assert_eq!(DutyStatus::Driving.to_string(), "Driving");
        assert_eq!(DutyStatus::OnDutyNotDriving.as_str(), "OnDutyNotDriving");
        assert_eq!(DutyStatus::OffDuty.as_str(), "OffDuty");
        assert_eq!(DutyStatus::SleeperBerth.as_str(), "SleeperBerth");
    }

    #[test]
    fn on_duty_classification() {
        assert!(DutyStatus::Driving.is_on_duty());
        assert!(DutyStatus::OnDutyNotDriving.is_on_duty());
        assert!(!DutyStatus::OffDuty.is_on_duty());
        assert!(!DutyStatus::SleeperBerth.is_on_duty());
    }
}

#[cfg(test)]
mod rules {
    use crate::{HosError, HosRules, Span};

    #[test]
    fn defaults_match_fmcsa_values() {
        let r = HosRules::default();
        assert_eq!(r.avg_speed_mph, 55.0);
        assert_eq!(r.fuel_range_miles, 1000.0);
        assert_eq!(r.max_drive(), Span::from_hours(11));
        assert_eq!(r.max_on_duty(), Span::from_hours(14));
        assert_eq!(r.break_after(), Span::from_hours(8));
        assert_eq!(r.off_duty_reset(), Span::from_hours(10));
        assert_eq!(r.cycle_limit(), Span::from_hours(70));
        assert_eq!(r.restart(), Span::from_hours(34));
        assert_eq!(r.fuel_stop(), Span::from_minutes(45));
        assert_eq!(r.pickup(), Span::from_minutes(60));
        assert_eq!(r.max_leg_miles(), 55.0);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn drive_time_at_average_speed() {
        let r = HosRules::default();
        assert_eq!(r.drive_time(55.0), Span::from_hours(1));
        assert_eq!(r.drive_time(27.5), Span::from_minutes(30));
    }

    #[test]
    fn zero_speed_rejected() {
        let r = HosRules { avg_speed_mph: 0.0, ..HosRules::default() };
        assert!(matches!(r.validate(), Err(HosError::Config(_))));
    }

    #[test]
    fn nan_leg_rejected() {
        let r = HosRules { max_leg_hours: f64::NAN, ..HosRules::default() };
        assert!(r.validate().is_err());
    }

    #[test]
    fn negative_limit_rejected() {
        let r = HosRules { cycle_limit_hours: -1.0, ..HosRules::default() };
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("cycle_limit_hours"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_fields_default_when_missing() {
        let r: HosRules = serde_json::from_str(r#"{ "avg_speed_mph": 60.0 }"#).unwrap();
        assert_eq!(r.avg_speed_mph, 60.0);
        assert_eq!(r.max_drive_hours, 11.0);
    }
}
