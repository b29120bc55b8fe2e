//! Unit tests for record assembly - per-field degradation and the 52-week
//! field-name fallback.

#[cfg(test)]
mod aggregator_tests {
    use crate::analysis::aggregator::{assemble, RawFetches};
    use crate::analysis::types::Recommendation;
    use serde_json::json;

    #[test]
    fn test_assemble_full_payload() {
        let raw = RawFetches {
            live: Some(json!({"price": 150.0, "timestamp": "2025-01-01T00:00:00Z"})),
            today: Some(json!({"high": 152.0, "low": 148.0})),
            week52: Some(json!({"week52High": 200.0, "week52Low": 100.0})),
            fundamentals: Some(json!({"peRatio": 25.1, "marketCap": 2.5e12})),
            rsi: Some(json!({"value": 25.0})),
            sma: Some(json!({"value": 140.0})),
            ema: Some(json!({"value": 145.0})),
            macd: Some(json!({"macd": 1.2, "signal": 0.4, "histogram": 0.8})),
        };

        let analysis = assemble("AAPL", raw);

        assert_eq!(analysis.symbol, "AAPL");
        assert_eq!(analysis.live_price, Some(150.0));
        assert_eq!(analysis.day_high, Some(152.0));
        assert_eq!(analysis.day_low, Some(148.0));
        assert_eq!(analysis.week52_high, Some(200.0));
        assert_eq!(analysis.week52_low, Some(100.0));
        assert!(analysis.fundamentals.is_some());
        assert_eq!(analysis.indicators.len(), 4);

        // RSI 25 buy, price above both averages, MACD bullish: 5.5
        assert_eq!(
            analysis.overall_decision,
            "Overall: BUY (weighted indicators bullish)"
        );
    }

    #[test]
    fn test_assemble_week52_alternate_field_names() {
        let raw = RawFetches {
            week52: Some(json!({"high": 200.0, "low": 100.0})),
            ..Default::default()
        };
        let analysis = assemble("TSLA", raw);
        assert_eq!(analysis.week52_high, Some(200.0));
        assert_eq!(analysis.week52_low, Some(100.0));
    }

    #[test]
    fn test_assemble_week52_primary_name_wins() {
        let raw = RawFetches {
            week52: Some(json!({"week52High": 210.0, "high": 200.0})),
            ..Default::default()
        };
        let analysis = assemble("TSLA", raw);
        assert_eq!(analysis.week52_high, Some(210.0));
    }

    #[test]
    fn test_assemble_everything_absent_still_holds() {
        let analysis = assemble("MSFT", RawFetches::default());

        assert_eq!(analysis.symbol, "MSFT");
        assert_eq!(analysis.live_price, None);
        assert!(analysis.indicators.is_empty());
        assert_eq!(
            analysis.overall_decision,
            "Overall: HOLD (mixed or neutral signals)"
        );
    }

    #[test]
    fn test_assemble_missing_price_degrades_averages_to_hold() {
        // SMA/EMA need the live price; without it they hold, RSI still reads
        let raw = RawFetches {
            rsi: Some(json!({"value": 75.0})),
            sma: Some(json!({"value": 140.0})),
            ema: Some(json!({"value": 145.0})),
            ..Default::default()
        };
        let analysis = assemble("NVDA", raw);

        assert_eq!(
            analysis.indicators["sma_20"].recommendation,
            Recommendation::Hold
        );
        assert_eq!(
            analysis.indicators["ema_14"].recommendation,
            Recommendation::Hold
        );
        assert_eq!(
            analysis.indicators["rsi"].recommendation,
            Recommendation::Sell
        );
        // -1.0 from RSI alone: below the sell threshold
        assert_eq!(
            analysis.overall_decision,
            "Overall: HOLD (mixed or neutral signals)"
        );
    }

    #[test]
    fn test_assemble_unusable_reading_becomes_hold_verdict() {
        let raw = RawFetches {
            rsi: Some(json!({"status": "pending"})),
            ..Default::default()
        };
        let analysis = assemble("AMZN", raw);

        let rsi = &analysis.indicators["rsi"];
        assert_eq!(rsi.recommendation, Recommendation::Hold);
        assert_eq!(rsi.meaning, "RSI not available");
    }

    #[test]
    fn test_assemble_bearish_trend_pair() {
        let raw = RawFetches {
            live: Some(json!({"price": 90.0})),
            sma: Some(json!({"value": 100.0})),
            macd: Some(json!({"macd": -0.5, "signal": 0.2})),
            ..Default::default()
        };
        let analysis = assemble("META", raw);

        // sma sell (-1.5) + macd sell (-1.8) = -3.3
        assert_eq!(
            analysis.overall_decision,
            "Overall: SELL (weighted indicators bearish)"
        );
    }
}
