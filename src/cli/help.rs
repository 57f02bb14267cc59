pub const TOP_LONG_ABOUT: &str = "rummage walks each PATH (or the current directory) depth-first and prints every non-directory file whose last access time is older than the given threshold.\n\nSymbolic links are never followed: a link is reported like any other file, by its own access time.";

pub const TOP_AFTER_HELP: &str = "EXAMPLES:\n  rummage -d 30 ~/Downloads\n  rummage -h 12 /var/tmp /tmp\n  rummage -m 90\n  rummage 7 build/          (legacy form: a bare number is days)\n  rummage --json -d 365 ~\n\nOUTPUT:\n  stdout: <path> \\t <access time>, one line per stale file\n  stderr: one line per path that could not be read\n\nNOTES:\n  A file is stale when its access time is strictly older than the threshold.\n  Filesystems mounted with noatime or relatime may report stale access times.";
