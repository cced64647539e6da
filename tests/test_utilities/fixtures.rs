use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::thread;
use zip::write::SimpleFileOptions;

/// A realistic .nuspec with a grouped dependency list
pub const SAMPLE_NUSPEC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd">
  <metadata>
    <id>MyPackage</id>
    <version>1.0.0</version>
    <dependencies>
      <group targetFramework=".NETStandard2.0">
        <dependency id="PackageA" version="1.0.0" exclude="Build,Analyzers" />
        <dependency id="PackageB" version="2.0.0" exclude="Build,Analyzers" />
      </group>
      <group targetFramework="net8.0">
        <dependency id="PackageA" version="1.0.0" exclude="Build,Analyzers" />
      </group>
    </dependencies>
  </metadata>
</package>"#;

/// Mermaid text expected for `SAMPLE_NUSPEC` with root `MyPackage`
pub const SAMPLE_GRAPH: &str =
    "graph TD\nMyPackage[MyPackage]\nMyPackage --> PackageA\nMyPackage --> PackageB";

/// Builds an in-memory .nupkg (zip) archive from `(entry name, content)` pairs
pub fn build_nupkg(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Archive laid out like a real package: relationships, manifest, dll, content types
pub fn sample_nupkg() -> Vec<u8> {
    build_nupkg(&[
        ("_rels/.rels", "<Relationships />"),
        ("MyPackage.nuspec", SAMPLE_NUSPEC),
        ("lib/net8.0/MyPackage.dll", "MZ"),
        ("[Content_Types].xml", "<Types />"),
    ])
}

/// Serves exactly one canned HTTP response on a local port and returns its URL
pub fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let header = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    format!("http://{}/api/v2/package/MyPackage/1.0.0", addr)
}

/// URL on a local port nothing is listening on
pub fn unreachable_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{}/api/v2/package/MyPackage/1.0.0", port)
}
