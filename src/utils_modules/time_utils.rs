use crate::common::*;

#[doc = "Standard Function of Datetime"]
fn convert_date_to_str<Tz>(
    time: DateTime<Tz>,
    tz: Tz, // Timezone (Utc, Local, FixedOffset ...)
    format: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(&tz).format(format).to_string()
}

#[doc = "Renders a datetime in the `%Y-%m-%dT%H:%M:%SZ` form used for document date fields."]
pub fn convert_date_to_str_full<Tz>(
    time: DateTime<Tz>,
    tz: Tz, // Timezone (Utc, Local, FixedOffset ...)
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    convert_date_to_str(time, tz, "%Y-%m-%dT%H:%M:%SZ")
}
