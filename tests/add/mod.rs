mod add_file_prints_digest;
mod add_from_nested_directory;
mod adding_a_missing_file_stages_nothing;
mod identical_content_is_stored_once;
