mod diff_blobs;
mod diff_invalid_digest_fails;
