use std::fs::File;
use std::io;

/// Close `file` and report what close(2) returned. Dropping a `File`
/// discards that result, which hides deferred write-back errors on NFS and
/// FUSE mounts.
#[cfg(unix)]
pub fn close_file(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    nix::unistd::close(file.into_raw_fd()).map_err(io::Error::from)
}

#[cfg(not(unix))]
pub fn close_file(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}
