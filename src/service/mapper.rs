//! Pure translation of BotsArchive JSON bodies into typed values.
//!
//! The API is loose about scalar types: `offline` comes as `"0"`/`"1"`,
//! `groups`/`inline` as `0`/`1`, `developer_id` sometimes as a string. The
//! coercions differ per field: `"0"` is truthy for `groups` but means
//! online for `offline`.

use itertools::Itertools;
use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer,
};
use serde_json::Value;
use snafu::{OptionExt, ResultExt};

use crate::{
    error,
    model::{Bot, VoteOutcome},
    util,
};

/// Literal the API puts in `message` when the requested bot does not exist.
pub const BOT_NOT_FOUND: &str = "bot not found";

#[derive(Debug, Deserialize)]
struct RawBot {
    id: i64,
    name: String,
    username: String,
    description: String,
    #[serde(default)]
    warn: Option<String>,
    msg: String,
    #[serde(deserialize_with = "one_or_many")]
    category: Vec<String>,
    #[serde(deserialize_with = "truthy")]
    groups: bool,
    #[serde(deserialize_with = "truthy")]
    inline: bool,
    #[serde(deserialize_with = "integer")]
    developer_id: i64,
    stars: u64,
    votes: u64,
    vote: f64,
    tags: String,
    languages: String,
    #[serde(deserialize_with = "integer")]
    offline: i64,
    #[serde(deserialize_with = "truthy")]
    photo: bool,
}

impl RawBot {
    fn into_bot(self, photo_base_url: Option<&str>) -> Bot {
        let photo_url = photo_base_url
            .filter(|_| self.photo)
            .map(|base| format!("{}/{}.jpg", base, self.id));

        Bot {
            id: self.id,
            name: self.name,
            username: self.username,
            description: self.description,
            warn: self.warn,
            msg: self.msg,
            category: self.category,
            groups: self.groups,
            inline: self.inline,
            developer_id: self.developer_id,
            stars: self.stars,
            votes: self.votes,
            vote: self.vote,
            tags: split_tags(&self.tags),
            languages: self
                .languages
                .split_whitespace()
                .map(str::to_string)
                .collect_vec(),
            offline: self.offline != 0,
            photo: self.photo,
            photo_url,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(d)? {
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Value::deserialize(d).map(|v| is_truthy(&v))
}

fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let v = Value::deserialize(d)?;
    as_integer(&v).ok_or_else(|| {
        de::Error::invalid_value(
            Unexpected::Other(&v.to_string()),
            &"an integer or numeric string",
        )
    })
}

/// Loose truthiness: null, false, zero and empty containers are false.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Integer coercion accepting numbers, numeric strings and booleans.
/// Floats are truncated; strings must hold a whole number.
pub fn as_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `"#a #b"` -> `["a", "b"]`. Strips one leading `#` per token.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .map(|word| word.strip_prefix('#').unwrap_or(word).to_string())
        .collect_vec()
}

/// Map one bot object, deriving `photo_url` from `photo_base_url` when it has a photo.
pub fn map_bot(value: &Value, photo_base_url: &str) -> util::Result<Bot> {
    RawBot::deserialize(value)
        .context(error::BotPayloadSnafu)
        .map(|raw| raw.into_bot(Some(photo_base_url)))
}

/// Map one bot object from a category listing. These never carry `photo_url`.
pub fn map_category_bot(value: &Value) -> util::Result<Bot> {
    RawBot::deserialize(value)
        .context(error::BotPayloadSnafu)
        .map(|raw| raw.into_bot(None))
}

pub fn interpret_vote(body: &Value) -> util::Result<VoteOutcome> {
    if let Some(result) = body.get("result") {
        return as_integer(result)
            .map(VoteOutcome::Voted)
            .context(error::InvalidFieldSnafu {
                field: "result",
                expected: "an integer or numeric string",
            });
    }

    if body.get("vote").is_some() {
        return Ok(VoteOutcome::NotVoted);
    }

    Ok(VoteOutcome::Unknown)
}

/// The API signals a missing bot only through this `message` literal, with a 200 status.
/// Returns the message when it matches.
pub fn bot_not_found(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|msg| *msg == BOT_NOT_FOUND)
}

pub fn ensure_bot_found(body: &Value) -> util::Result<()> {
    match bot_not_found(body) {
        Some(message) => error::BotNotFoundSnafu { message }.fail(),
        None => Ok(()),
    }
}

pub fn result_field(body: &Value) -> util::Result<&Value> {
    body.get("result")
        .context(error::MissingFieldSnafu { field: "result" })
}

/// `result` of a listing endpoint. `None` when the API returned nothing.
pub fn result_list(body: &Value) -> util::Result<Option<&Vec<Value>>> {
    let result = result_field(body)?;

    if !is_truthy(result) {
        return Ok(None);
    }

    result.as_array().map(Some).context(error::InvalidFieldSnafu {
        field: "result",
        expected: "an array of bots",
    })
}
