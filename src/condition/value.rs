use {
    crate::serutil::StringList,
    chrono::{DateTime, SecondsFormat, Utc},
    ipnet::IpNet,
    std::net::IpAddr,
};

// Dates render the way the IAM console writes them: ISO 8601 with milliseconds and a `Z` suffix.
fn iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<DateTime<Utc>> for StringList {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Single(iso8601(&dt))
    }
}

impl From<Vec<DateTime<Utc>>> for StringList {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        Self::List(v.iter().map(iso8601).collect())
    }
}

impl From<IpNet> for StringList {
    fn from(net: IpNet) -> Self {
        Self::Single(net.to_string())
    }
}

impl From<Vec<IpNet>> for StringList {
    fn from(v: Vec<IpNet>) -> Self {
        Self::List(v.iter().map(IpNet::to_string).collect())
    }
}

impl From<IpAddr> for StringList {
    fn from(addr: IpAddr) -> Self {
        Self::Single(addr.to_string())
    }
}
