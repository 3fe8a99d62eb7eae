//! Forecast document model.
//!
//! Mirrors the upstream XML response: `location` and `current` are
//! required, the `forecast` subtree may be absent. Hourly entries are
//! always a list; a document with a single `<hour>` element
//! deserializes as a one-element list, never as a bare record.

use quick_xml::de::from_str;
use serde::Deserialize;

/// Full structured weather response for one location.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ForecastDocument {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    #[serde(default)]
    pub forecast: ForecastBlock,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LocationInfo {
    pub name: String,
}

/// Conditions at query time.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in °C
    pub temp_c: f32,
    /// Wind speed in km/h
    pub wind_kph: f32,
    pub condition: ConditionText,
}

/// Free-text condition wrapper, e.g. `<condition><text>Sunny</text></condition>`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConditionText {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ForecastBlock {
    #[serde(default, rename = "forecastday")]
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ForecastDay {
    #[serde(default, rename = "hour")]
    pub hours: Vec<HourRecord>,
}

/// One hourly forecast entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HourRecord {
    pub time: String, // Format: "YYYY-MM-DD HH:MM"
    /// Temperature in °C
    pub temp_c: f32,
    /// Wind speed in km/h
    pub wind_kph: f32,
    pub condition: ConditionText,
}

impl ForecastDocument {
    /// Deserialize an upstream XML body.
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        from_str(xml)
    }

    /// All hourly records across forecast days, in document order.
    pub fn hours(&self) -> impl Iterator<Item = &HourRecord> {
        self.forecast.days.iter().flat_map(|day| day.hours.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_document() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
    <location>
        <name>London</name>
        <region>City of London, Greater London</region>
        <country>United Kingdom</country>
        <lat>51.52</lat>
        <lon>-0.11</lon>
        <tz_id>Europe/London</tz_id>
        <localtime>2024-06-01 14:02</localtime>
    </location>
    <current>
        <last_updated>2024-06-01 14:00</last_updated>
        <temp_c>18.0</temp_c>
        <temp_f>64.4</temp_f>
        <is_day>1</is_day>
        <condition>
            <text>Partly cloudy</text>
            <icon>//cdn.weatherapi.com/weather/64x64/day/116.png</icon>
            <code>1003</code>
        </condition>
        <wind_mph>8.1</wind_mph>
        <wind_kph>13.0</wind_kph>
        <humidity>63</humidity>
    </current>
    <forecast>
        <forecastday>
            <date>2024-06-01</date>
            <hour>
                <time>2024-06-01 13:00</time>
                <temp_c>17.5</temp_c>
                <wind_kph>12.2</wind_kph>
                <condition>
                    <text>Sunny</text>
                    <code>1000</code>
                </condition>
            </hour>
            <hour>
                <time>2024-06-01 14:00</time>
                <temp_c>18.0</temp_c>
                <wind_kph>13.0</wind_kph>
                <condition>
                    <text>Partly cloudy</text>
                    <code>1003</code>
                </condition>
            </hour>
        </forecastday>
    </forecast>
</root>"#;

        let document = ForecastDocument::from_xml(xml).unwrap();
        assert_eq!(document.location.name, "London");
        assert_eq!(document.current.temp_c, 18.0);
        assert_eq!(document.current.wind_kph, 13.0);
        assert_eq!(document.current.condition.text, "Partly cloudy");

        let hours: Vec<_> = document.hours().collect();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].time, "2024-06-01 13:00");
        assert_eq!(hours[0].condition.text, "Sunny");
        assert_eq!(hours[1].temp_c, 18.0);
    }

    #[test]
    fn test_single_hour_parses_as_list() {
        let xml = r#"<root>
    <location><name>Oslo</name></location>
    <current>
        <temp_c>3.0</temp_c>
        <wind_kph>5.0</wind_kph>
        <condition><text>Light snow</text></condition>
    </current>
    <forecast>
        <forecastday>
            <hour>
                <time>2024-01-10 09:00</time>
                <temp_c>2.5</temp_c>
                <wind_kph>4.0</wind_kph>
                <condition><text>Light snow</text></condition>
            </hour>
        </forecastday>
    </forecast>
</root>"#;

        let document = ForecastDocument::from_xml(xml).unwrap();
        assert_eq!(document.hours().count(), 1);
    }

    #[test]
    fn test_multiple_days_concatenate_in_order() {
        let xml = r#"<root>
    <location><name>Paris</name></location>
    <current>
        <temp_c>20.0</temp_c>
        <wind_kph>9.0</wind_kph>
        <condition><text>Sunny</text></condition>
    </current>
    <forecast>
        <forecastday>
            <hour>
                <time>2024-06-01 23:00</time>
                <temp_c>16.0</temp_c>
                <wind_kph>7.0</wind_kph>
                <condition><text>Clear</text></condition>
            </hour>
        </forecastday>
        <forecastday>
            <hour>
                <time>2024-06-02 00:00</time>
                <temp_c>15.5</temp_c>
                <wind_kph>6.0</wind_kph>
                <condition><text>Clear</text></condition>
            </hour>
            <hour>
                <time>2024-06-02 01:00</time>
                <temp_c>15.0</temp_c>
                <wind_kph>6.5</wind_kph>
                <condition><text>Clear</text></condition>
            </hour>
        </forecastday>
    </forecast>
</root>"#;

        let document = ForecastDocument::from_xml(xml).unwrap();
        let times: Vec<_> = document.hours().map(|h| h.time.as_str()).collect();
        assert_eq!(
            times,
            vec!["2024-06-01 23:00", "2024-06-02 00:00", "2024-06-02 01:00"]
        );
    }

    #[test]
    fn test_missing_forecast_defaults_to_empty() {
        let xml = r#"<root>
    <location><name>Lima</name></location>
    <current>
        <temp_c>22.0</temp_c>
        <wind_kph>11.0</wind_kph>
        <condition><text>Mist</text></condition>
    </current>
</root>"#;

        let document = ForecastDocument::from_xml(xml).unwrap();
        assert_eq!(document.hours().count(), 0);
        assert_eq!(document.current.condition.text, "Mist");
    }

    #[test]
    fn test_missing_current_is_an_error() {
        let xml = r#"<root>
    <location><name>Nowhere</name></location>
</root>"#;

        assert!(ForecastDocument::from_xml(xml).is_err());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(ForecastDocument::from_xml("<root><location>").is_err());
        assert!(ForecastDocument::from_xml("not xml at all").is_err());
    }
}
