// Code generated by assetpack. DO NOT EDIT.

pub fn assets() -> ::std::result::Result<::assetpack::FileSystem, ::assetpack::VfsError> {
    let mut builder = ::assetpack::FileSystemBuilder::new()
        .max_file_size(u64::MAX)
        .max_total_size(u64::MAX);
    builder.insert(
        "/a/x",
        ::assetpack::FileInfo::file("x", 2, 1700000000000000000),
        &[
                0x78, 0x78,
        ],
    )?;
    builder.insert(
        "/a/y.txt",
        ::assetpack::FileInfo::file("y.txt", 14, 1700000000123456789),
        &[
                0x68, 0x65, 0x6c, 0x6c, 0x6f, 0x2c, 0x20, 0x77, 0x6f, 0x72, 0x6c, 0x64,
                0x21, 0x0a,
        ],
    )?;
    builder.insert(
        "/docs/say \"hi\".txt",
        ::assetpack::FileInfo::file("say \"hi\".txt", 2, 0),
        &[
                0x68, 0x69,
        ],
    )?;
    builder.insert(
        "/empty",
        ::assetpack::FileInfo::file("empty", 0, 42),
        &[],
    )?;
    Ok(builder.build())
}
