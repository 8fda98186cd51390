use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;
use utils::errors::EnumParseError;

macro_rules! string_enum {
    ($name:ident [$($value:ident),+]) => {

            #[derive(AsExpression, FromSqlRow, Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
            #[sql_type = "Text"]
            pub enum $name {
                $(
                    $value,
                )*
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                 let s = match self {
                      $(
                        $name::$value => stringify!($value),
                       )*
                    };
                    write!(f, "{}", s)
                }
            }

            impl $name {
                pub fn parse(s: &str) -> Result<$name, EnumParseError> {
                  match s {
                      $(
                        stringify!($value) => Ok($name::$value),
                       )*
                        _ => Err(EnumParseError {
                            message: "Could not parse value".to_string(),
                            enum_type: stringify!($name).to_string(),
                            value: s.to_string(),
                        })
                    }
                }
            }

            impl ToSql<Text, Pg> for $name {
                fn to_sql<W: Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
                    out.write_all(self.to_string().as_bytes())?;
                    Ok(IsNull::No)
                }
            }

            impl FromSql<Text, Pg> for $name {
                fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
                    let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
                    Ok($name::parse(&s)?)
                }
            }
        }
}

string_enum! { CheckInStatus [Pending, CheckedIn] }
// Display state only, computed per read and never written to the store
string_enum! { TicketValidity [Valid, AlreadyCheckedIn, Expired, NotYetActive] }
string_enum! { DomainEventTypes [EventCreated, VendorTicketIssued, VendorTicketCheckedIn] }
string_enum! { Tables [Events, VendorTickets] }
