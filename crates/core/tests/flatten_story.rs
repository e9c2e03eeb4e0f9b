//! End-to-end flattening of a story as delivered by the Management API.

use sbtx::{FlattenError, FlattenOptions, Flattener, RichTextMode, SchemaIndex, render_story};
use sbtx_protocol::{Component, Story, StoryEnvelope};

const COMPONENTS: &str = r#"[
	{
		"name": "page",
		"real_name": "Page",
		"schema": {
			"title": { "type": "text", "translatable": true },
			"body": { "type": "bloks" },
			"internal_note": { "type": "textarea", "translatable": false, "display_name": "Internal note" }
		}
	},
	{
		"name": "hero",
		"real_name": "Hero",
		"schema": {
			"headline": { "type": "text", "translatable": true },
			"intro": { "type": "richtext", "translatable": true, "display_name": "Intro text" },
			"image": { "type": "asset" }
		}
	},
	{
		"name": "pricing",
		"display_name": "Pricing table",
		"schema": {
			"plans": { "type": "table", "translatable": true }
		}
	}
]"#;

const STORY: &str = r#"{
	"story": {
		"id": 101,
		"name": "Landing",
		"slug": "landing",
		"full_slug": "en/landing",
		"is_folder": false,
		"content": {
			"_uid": "root",
			"component": "page",
			"title": "Welcome",
			"body": [
				{
					"_uid": "h1",
					"component": "hero",
					"headline": "Fast & simple",
					"image": { "filename": "https://a.example/hero.png" },
					"intro": {
						"type": "doc",
						"content": [
							{ "type": "paragraph", "content": [
								{ "type": "text", "text": "Start " },
								{ "type": "text", "text": "today", "marks": [{ "type": "bold" }] }
							]},
							{ "type": "bullet_list", "content": [
								{ "type": "list_item", "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "No setup" }] }] }
							]}
						]
					}
				},
				{
					"_uid": "p1",
					"component": "pricing",
					"plans": {
						"thead": [{ "value": "Plan" }, { "value": "Price" }],
						"tbody": [
							{ "body": [{ "value": "Free" }, { "value": "0" }] },
							{ "body": [{ "value": "Pro" }, { "value": "12" }] }
						]
					}
				}
			],
			"internal_note": "Do not translate"
		}
	}
}"#;

fn fixtures() -> (SchemaIndex, Story) {
	let components: Vec<Component> = serde_json::from_str(COMPONENTS).expect("components fixture should parse");
	let envelope: StoryEnvelope = serde_json::from_str(STORY).expect("story fixture should parse");
	(SchemaIndex::from_components(components), envelope.story)
}

#[test]
fn exports_plain_text_document() {
	let (index, story) = fixtures();
	let flattener = Flattener::new(&index, FlattenOptions::default());
	let text = render_story(&story, &flattener).unwrap();

	let expected = [
		"Metadata:",
		"=========",
		"Slug: \"landing\"",
		"Name: \"Landing\"",
		"",
		"Content:",
		"==========",
		"",
		"Welcome",
		"",
		"Fast & simple",
		"",
		"Start today",
		"",
		"* No setup",
		"",
		"Plan | Price",
		"Free | 0",
		"Pro | 12",
		"",
		"Do not translate",
	]
	.join("\n");
	assert_eq!(text, expected);
}

#[test]
fn exports_translatable_markdown_with_paths() {
	let (index, story) = fixtures();
	let options = FlattenOptions {
		translatable_only: true,
		include_field_paths: true,
		rich_text_mode: RichTextMode::LightweightMarkup,
	};
	let blocks = Flattener::new(&index, options).flatten(&story.content).unwrap();

	assert_eq!(
		blocks,
		[
			"Field: \"Title\"\n------------------------------\nWelcome",
			"Field: \"Body > 0 > Hero > Headline\"\n------------------------------\nFast & simple",
			"Field: \"Body > 0 > Hero > Intro text\"\n------------------------------\nStart **today**\n\n- No setup",
			"Field: \"Body > 1 > Pricing table > Plans\"\n------------------------------\nPlan | Price\nFree | 0\nPro | 12",
		]
	);
}

#[test]
fn unknown_component_aborts_the_story() {
	let (_, story) = fixtures();
	let components: Vec<Component> = serde_json::from_str(COMPONENTS).unwrap();
	let index = SchemaIndex::from_components(components.into_iter().filter(|c| c.name != "pricing"));

	let err = render_story(&story, &Flattener::new(&index, FlattenOptions::default())).unwrap_err();
	match err {
		FlattenError::SchemaResolution { component, path } => {
			assert_eq!(component, "pricing");
			assert_eq!(path, "Body > 1");
		}
		other => panic!("unexpected error: {other}"),
	}
}
