mod scan_bad;
mod snapshot_tokens;
