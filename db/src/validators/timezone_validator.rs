use chrono_tz::Tz;
use validator::ValidationError;
use validators::create_validation_error;

pub fn timezone_valid(timezone: &str) -> Result<(), ValidationError> {
    timezone.parse::<Tz>().map(|_| ()).map_err(|_| {
        create_validation_error(
            "timezone_not_recognized",
            "Timezone must be a recognized IANA timezone name",
        )
    })
}
