//! The built-in schema for documentation article frontmatter.

use super::rule::{Schema, SchemaRule};

/// Product version keys accepted under `versions`.
const VERSIONS: &[SchemaRule] = &[
    SchemaRule::optional("fpt"),
    SchemaRule::optional("ghec"),
    SchemaRule::optional("ghes"),
    SchemaRule::optional("feature"),
];

/// Shape of the `sidebarLink` object.
const SIDEBAR_LINK: &[SchemaRule] = &[SchemaRule::required("text"), SchemaRule::required("href")];

const TOP_LEVEL: &[SchemaRule] = &[
    SchemaRule::required("title"),
    SchemaRule::required("versions").with_nested(VERSIONS),
    SchemaRule::optional("shortTitle"),
    SchemaRule::optional("intro"),
    SchemaRule::optional("permissions"),
    SchemaRule::optional("product"),
    SchemaRule::optional("redirect_from"),
    SchemaRule::optional("layout"),
    SchemaRule::optional("hidden"),
    SchemaRule::optional("children"),
    SchemaRule::optional("childGroups"),
    SchemaRule::optional("topics"),
    SchemaRule::optional("type"),
    SchemaRule::optional("contentType"),
    SchemaRule::optional("learningTracks"),
    SchemaRule::optional("featuredLinks"),
    SchemaRule::optional("introLinks"),
    SchemaRule::optional("changelog"),
    SchemaRule::optional("allowTitleToDifferFromFilename"),
    SchemaRule::optional("showMiniToc"),
    SchemaRule::optional("defaultPlatform"),
    SchemaRule::optional("defaultTool"),
    SchemaRule::optional("effectiveDate"),
    SchemaRule::optional("communityRedirect"),
    SchemaRule::optional("beta_product"),
    SchemaRule::optional("interactive"),
    SchemaRule::optional("includeGuides"),
    SchemaRule::optional("authors"),
    SchemaRule::optional("examples_source"),
    SchemaRule::optional("autogenerated"),
    SchemaRule::optional("octicon"),
    SchemaRule::optional("category"),
    SchemaRule::optional("complexity"),
    SchemaRule::optional("journeyTracks"),
    SchemaRule::optional("noEarlyAccessBanner"),
    SchemaRule::optional("earlyAccessToc"),
    SchemaRule::optional("mapTopic"),
    SchemaRule::optional("sidebarLink").with_nested(SIDEBAR_LINK),
    SchemaRule::deprecated("miniTocMaxHeadingLevel"),
];

/// Schema every article's frontmatter is checked against.
pub static FRONTMATTER_SCHEMA: Schema = Schema::new(TOP_LEVEL);
