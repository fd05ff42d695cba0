use proptest::prelude::*;

use super::*;

fn sample() -> Compound {
	Compound::new()
		.with("flag", true)
		.with("count", 7i32)
		.with("small", 3i8)
		.with("name", "spawn")
		.with("pos", BlockPos::new(1, -2, 3))
		.with("items", vec![Tag::Int(1), Tag::Int(2)])
		.with("nested", Compound::new().with("inner", 1.5f64))
}

#[test]
fn typed_getters_read_matching_kinds() {
	let c = sample();
	assert!(c.get_bool("flag").unwrap());
	assert_eq!(c.get_int("count").unwrap(), 7);
	assert_eq!(c.get_str("name").unwrap(), "spawn");
	assert_eq!(c.get_block_pos("pos").unwrap(), BlockPos::new(1, -2, 3));
	assert_eq!(c.get_list("items").unwrap().len(), 2);
	assert_eq!(c.get_compound("nested").unwrap().get_double("inner").unwrap(), 1.5);
}

#[test]
fn int_getter_widens_bytes() {
	assert_eq!(sample().get_int("small").unwrap(), 3);
}

#[test]
fn missing_field_is_reported_by_key() {
	let err = sample().get_int("absent").unwrap_err();
	assert_eq!(err, FieldError::missing("absent"));
	assert_eq!(err.to_string(), "field \"absent\": missing");
}

#[test]
fn wrong_kind_names_both_kinds() {
	let err = sample().get_str("count").unwrap_err();
	assert_eq!(err.kind, FieldErrorKind::WrongKind {
		expected: TagKind::String,
		found: TagKind::Int,
	});
}

#[test]
fn block_pos_requires_three_components() {
	let c = Compound::new().with("pos", vec![1i32, 2]);
	let err = c.get_block_pos("pos").unwrap_err();
	assert!(matches!(err.kind, FieldErrorKind::Invalid(_)));
	assert_eq!(Compound::new().get_optional_block_pos("pos").unwrap(), None);
}

#[test]
fn keys_iterate_sorted() {
	let keys: Vec<_> = sample().keys().map(str::to_owned).collect();
	let mut sorted = keys.clone();
	sorted.sort();
	assert_eq!(keys, sorted);
}

fn nested_lists(levels: usize) -> Tag {
	(0..levels).fold(Tag::Int(0), |inner, _| Tag::List(vec![inner]))
}

#[test]
fn postcard_round_trip_keeps_every_kind() {
	let tag = Tag::Compound(sample().with("ints", vec![4i32, 5, 6]).with("big", 1i64 << 40));
	let bytes = postcard::to_stdvec(&tag).unwrap();
	assert_eq!(postcard::from_bytes::<Tag>(&bytes).unwrap(), tag);
}

#[test]
fn bounded_decode_counts_each_nesting_level() {
	use serde::de::DeserializeSeed;

	let bytes = postcard::to_stdvec(&nested_lists(3)).unwrap();
	let decode = |depth| BoundedTag::new(depth).deserialize(&mut postcard::Deserializer::from_bytes(&bytes));
	assert_eq!(decode(4).unwrap(), nested_lists(3));
	assert!(decode(3).is_err());
}

#[test]
fn runaway_nesting_fails_instead_of_recursing() {
	// List variant (6) with one element, repeated far past the default limit.
	let bytes: Vec<u8> = [6u8, 1].repeat(1_000_000);
	assert!(postcard::from_bytes::<Tag>(&bytes).is_err());
	let nested = postcard::to_stdvec(&nested_lists(DEFAULT_MAX_TAG_DEPTH)).unwrap();
	assert!(postcard::from_bytes::<Tag>(&nested).is_err());
	let fits = postcard::to_stdvec(&nested_lists(DEFAULT_MAX_TAG_DEPTH - 1)).unwrap();
	assert!(postcard::from_bytes::<Tag>(&fits).is_ok());
}

proptest! {
	#[test]
	fn block_pos_survives_tag_storage(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
		let pos = BlockPos::new(x, y, z);
		let tag = Tag::from(pos);
		prop_assert_eq!(tag.as_block_pos(), Some(pos));
	}
}
