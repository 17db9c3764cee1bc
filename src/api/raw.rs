//! ### RawOp
//! Exchange-format shape of an operation, as found in json deltas.
//!
//! `{ insert: <text-or-embed>, attributes? }`, `{ retain: <n>, attributes? }` and
//! `{ delete: <n> }`. Conversion into [Op] is where malformed operations get rejected.

use crate::{
	api::{op::Content, AttributeMap, Op, INFINITE_RETAIN},
	errors::{OpError, OpResult},
};

/// loosely typed operation, every tag optional
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RawOp {
	#[cfg_attr(feature = "serialize", serde(default, skip_serializing_if = "Option::is_none"))]
	pub insert: Option<serde_json::Value>,
	#[cfg_attr(feature = "serialize", serde(default, skip_serializing_if = "Option::is_none"))]
	pub delete: Option<usize>,
	#[cfg_attr(feature = "serialize", serde(default, skip_serializing_if = "Option::is_none"))]
	pub retain: Option<usize>,
	#[cfg_attr(feature = "serialize", serde(default, skip_serializing_if = "Option::is_none"))]
	pub attributes: Option<AttributeMap>,
}

impl TryFrom<RawOp> for Op {
	type Error = OpError;

	fn try_from(raw: RawOp) -> OpResult<Op> {
		let populated = [raw.insert.is_some(), raw.delete.is_some(), raw.retain.is_some()]
			.into_iter()
			.filter(|x| *x)
			.count();
		let attributes = raw.attributes.filter(|attrs| !attrs.is_empty());

		match (raw.insert, raw.delete, raw.retain) {
			(Some(serde_json::Value::String(txt)), None, None) =>
				Ok(Op::Insert { content: Content::Text(txt), attributes }),
			(Some(embed), None, None) =>
				Ok(Op::Insert { content: Content::Embed(embed), attributes }),
			(None, None, Some(INFINITE_RETAIN)) => {
				tracing::warn!("rejecting retain with reserved length {}", INFINITE_RETAIN);
				Err(OpError::ReservedRetain { len: INFINITE_RETAIN })
			},
			(None, None, Some(len)) =>
				Ok(Op::Retain { len, attributes }),
			(None, Some(len), None) => match attributes {
				None => Ok(Op::Delete { len }),
				Some(_) => {
					tracing::warn!("rejecting delete of {} carrying attributes", len);
					Err(OpError::AttributedDelete)
				},
			},
			_ => {
				tracing::warn!("rejecting operation with {} populated tags", populated);
				Err(OpError::Malformed { populated })
			},
		}
	}
}

impl From<Op> for RawOp {
	fn from(op: Op) -> Self {
		match op {
			Op::Insert { content: Content::Text(txt), attributes } =>
				RawOp { insert: Some(serde_json::Value::String(txt)), attributes, ..Default::default() },
			Op::Insert { content: Content::Embed(embed), attributes } =>
				RawOp { insert: Some(embed), attributes, ..Default::default() },
			Op::Retain { len, attributes } =>
				RawOp { retain: Some(len), attributes, ..Default::default() },
			Op::Delete { len } =>
				RawOp { delete: Some(len), ..Default::default() },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn op_without_tags_is_malformed() {
		let raw = RawOp { attributes: Some(AttributeMap::from([("bold".into(), json!(true))])), ..Default::default() };
		assert_eq!(Op::try_from(raw), Err(OpError::Malformed { populated: 0 }));
	}

	#[test]
	fn op_with_many_tags_is_malformed() {
		let raw = RawOp { insert: Some(json!("a")), retain: Some(1), ..Default::default() };
		assert_eq!(Op::try_from(raw), Err(OpError::Malformed { populated: 2 }));
		let raw = RawOp { insert: Some(json!("a")), retain: Some(1), delete: Some(1), attributes: None };
		assert_eq!(Op::try_from(raw), Err(OpError::Malformed { populated: 3 }));
	}

	#[test]
	fn delete_with_attributes_is_rejected() {
		let raw = RawOp { delete: Some(3), attributes: Some(AttributeMap::from([("bold".into(), json!(true))])), ..Default::default() };
		assert_eq!(Op::try_from(raw), Err(OpError::AttributedDelete));
	}

	#[test]
	fn delete_with_empty_attributes_is_accepted() {
		let raw = RawOp { delete: Some(3), attributes: Some(AttributeMap::new()), ..Default::default() };
		assert_eq!(Op::try_from(raw), Ok(Op::delete(3)));
	}

	#[test]
	fn retain_of_reserved_length_is_rejected() {
		let raw = RawOp { retain: Some(usize::MAX), ..Default::default() };
		assert_eq!(Op::try_from(raw), Err(OpError::ReservedRetain { len: usize::MAX }));
		let raw = RawOp { retain: Some(usize::MAX - 1), ..Default::default() };
		assert_eq!(Op::try_from(raw), Ok(Op::retain(usize::MAX - 1)));
	}

	#[test]
	fn non_string_insert_is_an_embed() {
		let raw = RawOp { insert: Some(json!({ "formula": "e=mc^2" })), ..Default::default() };
		assert_eq!(Op::try_from(raw), Ok(Op::insert_embed(json!({ "formula": "e=mc^2" }))));
		let raw = RawOp { insert: Some(json!(42)), ..Default::default() };
		assert_eq!(Op::try_from(raw), Ok(Op::insert_embed(json!(42))));
	}

	#[test]
	fn conversion_back_keeps_only_populated_fields() {
		let raw = RawOp::from(Op::retain(4).with_attribute("italic", true));
		assert_eq!(raw.retain, Some(4));
		assert!(raw.insert.is_none() && raw.delete.is_none());
		assert_eq!(raw.attributes.unwrap()["italic"], json!(true));
	}

	#[cfg(feature = "serialize")]
	#[test]
	fn json_delta_deserializes_into_ops() {
		let ops: Vec<Op> = serde_json::from_str(r#"[
			{ "insert": "Hello" },
			{ "retain": 5, "attributes": { "bold": true } },
			{ "delete": 3 },
			{ "insert": { "image": "octocat.png" }, "attributes": { "width": 40 } }
		]"#).unwrap();
		assert_eq!(ops, vec![
			Op::insert("Hello"),
			Op::retain(5).with_attribute("bold", true),
			Op::delete(3),
			Op::insert_embed(json!({ "image": "octocat.png" })).with_attribute("width", 40),
		]);
	}

	#[cfg(feature = "serialize")]
	#[test]
	fn malformed_json_op_fails_to_deserialize() {
		assert!(serde_json::from_str::<Op>(r#"{ "insert": "a", "delete": 1 }"#).is_err());
		assert!(serde_json::from_str::<Op>(r#"{ "attributes": { "bold": true } }"#).is_err());
		assert!(serde_json::from_str::<Op>(r#"{ "retain": -1 }"#).is_err());
	}

	#[cfg(feature = "serialize")]
	#[test]
	fn ops_serialize_to_wire_shape() {
		let txt = serde_json::to_value(Op::insert("Hel").with_attribute("bold", true)).unwrap();
		assert_eq!(txt, json!({ "insert": "Hel", "attributes": { "bold": true } }));
		let del = serde_json::to_value(Op::delete(3)).unwrap();
		assert_eq!(del, json!({ "delete": 3 }));
	}
}
