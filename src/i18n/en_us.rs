// ============================================================================
// LocaleX - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ✅ Translation key-value pairs maintenance
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain business logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Prompt related
    ("prompt.yes_no", "[Y/N]"),
    ("prompt.invalid_selection", "Invalid selection: {}"),
    // Source file discovery related
    ("files.none_found", "No .json files found in {}"),
    (
        "files.choose_source",
        "Choose the file to use as source file:",
    ),
    ("files.type_number", "Type file number"),
    (
        "files.not_json",
        "You must select a .json file or a folder containing .json files",
    ),
    ("files.not_found", "File not found: {}"),
    (
        "files.exists_prompt",
        "File {} already exists. Do you want to override it?",
    ),
    ("files.new_name_prompt", "Enter the new file name"),
    // Target locale related
    (
        "locale.prompt",
        "Language code to translate to (2 letters)",
    ),
    (
        "locale.same_language",
        "You are trying to translate into the source language!",
    ),
    // Translate command related
    ("translate.start", "Translating {} into locale '{}'..."),
    (
        "translate.cache_seeded",
        "Warmed translation cache with {} entries from {}",
    ),
    (
        "translate.cache_invalidated",
        "Invalidated {} cache entries on request",
    ),
    (
        "translate.cache_disabled",
        "Translation cache disabled for this run",
    ),
    ("translate.leaf_failed", "{}  ->  ERROR ({})"),
    (
        "translate.multi_candidates",
        "({}) more than one translation candidate returned, using the first",
    ),
    ("translate.saved", "Results saved on {}"),
    ("translate.cache_persisted", "Cache file updated: {}"),
    // Error messages
    ("error.read_source", "Failed to read source file: {}"),
    ("error.parse_source", "Failed to parse source file: {}"),
    (
        "error.parse_existing",
        "Failed to parse existing output file: {}",
    ),
    ("error.parse_cache", "Failed to parse cache file: {}"),
    (
        "error.cache_not_object",
        "Cache file is not a flat object of strings: {}",
    ),
    (
        "error.missing_auth_key",
        "Environment variable {} is not set (check your environment or .env file)",
    ),
    ("error.write_output", "Failed to write output file: {}"),
    ("error.write_cache", "Failed to write cache file: {}"),
    // Summary related
    ("summary.title", "Translation Summary"),
    ("summary.translated", "Translated via API: {}"),
    ("summary.cache_hits", "Cache hits: {}"),
    ("summary.kept", "Kept from existing output: {}"),
    ("summary.skipped", "Skipped keys: {}"),
    ("summary.failed", "Failed (left untranslated): {}"),
    ("summary.passthrough", "Passed through unchanged: {}"),
    ("summary.duration", "Completed in {}ms"),
    // Init related
    ("init.start", "Initializing LocaleX configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite existing config file",
    ),
    ("init.config_created", "Config file created: {}"),
    ("init.create_failed", "Failed to create config file: {}"),
    (
        "init.next_steps",
        "You can now edit the config file to suit your project needs",
    ),
    // Cache command related
    (
        "cache.show_title",
        "Cache entries for locale '{}' ({} entries):",
    ),
    ("cache.empty", "No cache file for locale '{}'"),
    ("cache.cleared", "Removed cache file: {}"),
    ("cache.cleared_all", "Removed {} cache file(s)"),
    ("cache.dir_missing", "No cache directory found"),
];
