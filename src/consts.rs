pub(crate) mod xml {
    pub(crate) const XMLNS: &str = "xmlns";
    pub(crate) const ID: &str = "id";
    pub(crate) const LANG: &str = "xml:lang";
}

pub(crate) mod ocf {
    pub(crate) const CONTAINER: &str = "container";
    pub(crate) const ROOT_FILES: &str = "rootfiles";
    pub(crate) const ROOT_FILE: &str = "rootfile";
    pub(crate) const VERSION: &str = "version";
    pub(crate) const FULL_PATH: &str = "full-path";
    pub(crate) const MEDIA_TYPE: &str = "media-type";

    pub(crate) const CONTAINER_VERSION: &str = "1.0";
    pub(crate) const CONTAINER_NS: &str = "urn:oasis:names:tc:opendocument:xmlns:container";

    // Paths
    pub(crate) const MIMETYPE_PATH: &str = "mimetype";
    pub(crate) const CONTAINER_PATH: &str = "META-INF/container.xml";
    pub(crate) const PACKAGE_PATH: &str = "OEBPS/content.opf";
    /// Directory containing the package document; manifest hrefs are relative to it.
    pub(crate) const PACKAGE_DIRECTORY: &str = "OEBPS";
}

pub(crate) mod opf {
    pub(crate) const OPF_NS: &str = "http://www.idpf.org/2007/opf";

    // Elements
    pub(crate) const PACKAGE: &str = "package";
    pub(crate) const METADATA: &str = "metadata";
    pub(crate) const MANIFEST: &str = "manifest";
    pub(crate) const SPINE: &str = "spine";
    pub(crate) const ITEM: &str = "item";
    pub(crate) const ITEMREF: &str = "itemref";
    pub(crate) const META: &str = "meta";

    // Package attributes
    pub(crate) const VERSION: &str = "version";
    pub(crate) const UNIQUE_ID: &str = "unique-identifier";
    pub(crate) const PACKAGE_VERSION: &str = "3.0";
    pub(crate) const BOOK_ID: &str = "BookId";

    // Metadata attributes
    pub(crate) const PROPERTY: &str = "property";
    pub(crate) const NAME: &str = "name";
    pub(crate) const CONTENT: &str = "content";
    pub(crate) const MODIFIED: &str = "dcterms:modified";
    pub(crate) const GENERATOR: &str = "generator";

    // Manifest attributes
    pub(crate) const HREF: &str = "href";
    pub(crate) const MEDIA_TYPE: &str = "media-type";
    pub(crate) const PROPERTIES: &str = "properties";
    pub(crate) const NAV_PROPERTY: &str = "nav";

    // Spine attributes
    pub(crate) const IDREF: &str = "idref";
    pub(crate) const LINEAR: &str = "linear";
    pub(crate) const NO: &str = "no";
}

pub(crate) mod dc {
    pub(crate) const XMLNS_DC: &str = "xmlns:dc";
    pub(crate) const DC_NS: &str = "http://purl.org/dc/elements/1.1/";

    pub(crate) const IDENTIFIER: &str = "dc:identifier";
    pub(crate) const TITLE: &str = "dc:title";
    pub(crate) const LANGUAGE: &str = "dc:language";
}

pub(crate) mod epub {
    pub(crate) const XMLNS: &str = "xmlns:epub";
    pub(crate) const EPUB_NS: &str = "http://www.idpf.org/2007/ops";

    pub(crate) const TYPE: &str = "epub:type";
    pub(crate) const TOC: &str = "toc";
    pub(crate) const LANDMARKS: &str = "landmarks";
    pub(crate) const FRONTMATTER: &str = "frontmatter";
}

pub(crate) mod xhtml {
    pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

    // Elements
    pub(crate) const HTML: &str = "html";
    pub(crate) const HEAD: &str = "head";
    pub(crate) const TITLE: &str = "title";
    pub(crate) const META: &str = "meta";
    pub(crate) const LINK: &str = "link";
    pub(crate) const BODY: &str = "body";
    pub(crate) const NAV: &str = "nav";
    pub(crate) const H1: &str = "h1";
    pub(crate) const H2: &str = "h2";
    pub(crate) const ORDERED_LIST: &str = "ol";
    pub(crate) const LIST_ITEM: &str = "li";
    pub(crate) const ANCHOR: &str = "a";

    // Attributes
    pub(crate) const LANG: &str = "lang";
    pub(crate) const CHARSET: &str = "charset";
    pub(crate) const HREF: &str = "href";
    pub(crate) const REL: &str = "rel";
    pub(crate) const TYPE: &str = "type";
    pub(crate) const HIDDEN: &str = "hidden";

    pub(crate) const UTF_8: &str = "utf-8";
    pub(crate) const STYLESHEET: &str = "stylesheet";
}

pub(crate) mod mime {
    pub(crate) const EPUB: &str = "application/epub+zip";
    pub(crate) const XHTML: &str = "application/xhtml+xml";
    pub(crate) const OEBPS_PACKAGE: &str = "application/oebps-package+xml";
    pub(crate) const CSS: &str = "text/css";
    pub(crate) const PNG: &str = "image/png";
    pub(crate) const JPEG: &str = "image/jpeg";
    pub(crate) const GIF: &str = "image/gif";
}
