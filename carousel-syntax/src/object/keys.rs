//! Well-known PDF names.
//!
//! Every entry is registered in the name registry when it is first used, so
//! looking one of these up never allocates.

macro_rules! well_known {
    ($($ident:ident => $name:literal),* $(,)?) => {
        $(
            #[allow(missing_docs)]
            pub const $ident: &[u8] = $name;
        )*

        pub(crate) const ALL: &[&[u8]] = &[$($name),*];
    };
}

well_known! {
    // A
    A => b"A",
    AA => b"AA",
    ABSOLUTE_COLORIMETRIC => b"AbsoluteColorimetric",
    AC => b"AC",
    ACRO_FORM => b"AcroForm",
    ACTUAL_TEXT => b"ActualText",
    ADBE => b"ADBE",
    ADBE_PKCS7_DETACHED => b"adbe.pkcs7.detached",
    ADBE_PKCS7_SHA1 => b"adbe.pkcs7.sha1",
    ADBE_X509_RSA_SHA1 => b"adbe.x509.rsa_sha1",
    ADOBE_PPKLITE => b"Adobe.PPKLite",
    AESV2 => b"AESV2",
    AESV3 => b"AESV3",
    AF => b"AF",
    AFTER => b"After",
    AF_RELATIONSHIP => b"AFRelationship",
    AIS => b"AIS",
    AI_META_DATA => b"AIMetaData",
    ALL_OFF => b"AllOff",
    ALL_ON => b"AllOn",
    ALPHA => b"Alpha",
    ALT => b"Alt",
    ALTERNATE => b"Alternate",
    ANNOT => b"Annot",
    ANNOTS => b"Annots",
    ANTI_ALIAS => b"AntiAlias",
    ANY_OFF => b"AnyOff",
    ANY_ON => b"AnyOn",
    AP => b"AP",
    APP => b"App",
    AP_REF => b"APRef",
    ARTIFACT => b"Artifact",
    ART_BOX => b"ArtBox",
    AS => b"AS",
    ASCENT => b"Ascent",
    ASCII85_DECODE => b"ASCII85Decode",
    ASCII85_DECODE_ABBREVIATION => b"A85",
    ASCII_HEX_DECODE => b"ASCIIHexDecode",
    ASCII_HEX_DECODE_ABBREVIATION => b"AHx",
    ATTACHED => b"Attached",
    AUTHOR => b"Author",
    AVG_WIDTH => b"AvgWidth",

    // B
    B => b"B",
    BACKGROUND => b"Background",
    BASE_ENCODING => b"BaseEncoding",
    BASE_FONT => b"BaseFont",
    BASE_STATE => b"BaseState",
    BASE_VERSION => b"BaseVersion",
    BBOX => b"BBox",
    BC => b"BC",
    BE => b"BE",
    BEAD => b"BEAD",
    BEFORE => b"Before",
    BG => b"BG",
    BITS_PER_COMPONENT => b"BitsPerComponent",
    BITS_PER_COORDINATE => b"BitsPerCoordinate",
    BITS_PER_FLAG => b"BitsPerFlag",
    BITS_PER_SAMPLE => b"BitsPerSample",
    BL => b"Bl",
    BLACK_IS_1 => b"BlackIs1",
    BLACK_POINT => b"BlackPoint",
    BLEED_BOX => b"BleedBox",
    BM => b"BM",
    BORDER => b"Border",
    BOUNDS => b"Bounds",
    BPC => b"BPC",
    BS => b"BS",
    BTN => b"Btn",
    BYTERANGE => b"ByteRange",

    // C
    C => b"C",
    C0 => b"C0",
    C1 => b"C1",
    CA => b"CA",
    CALCMYK => b"CalCMYK",
    CALGRAY => b"CalGray",
    CALRGB => b"CalRGB",
    CAP => b"Cap",
    CAP_HEIGHT => b"CapHeight",
    CATALOG => b"Catalog",
    CA_NS => b"ca",
    CCITTFAX_DECODE => b"CCITTFaxDecode",
    CCITTFAX_DECODE_ABBREVIATION => b"CCF",
    CENTER_WINDOW => b"CenterWindow",
    CERT => b"Cert",
    CERTS => b"Certs",
    CF => b"CF",
    CFM => b"CFM",
    CH => b"Ch",
    CHAR_PROCS => b"CharProcs",
    CHAR_SET => b"CharSet",
    CHECK_SUM => b"CheckSum",
    CI => b"CI",
    CICI_SIGNIT => b"CICI.SignIt",
    CIDSYSTEMINFO => b"CIDSystemInfo",
    CID_FONT_TYPE0 => b"CIDFontType0",
    CID_FONT_TYPE0C => b"CIDFontType0C",
    CID_FONT_TYPE2 => b"CIDFontType2",
    CID_SET => b"CIDSet",
    CID_TO_GID_MAP => b"CIDToGIDMap",
    CL => b"CL",
    CLASS_MAP => b"ClassMap",
    CLR_F => b"ClrF",
    CLR_FF => b"ClrFf",
    CMAP => b"CMap",
    CMAPNAME => b"CMapName",
    CMYK => b"CMYK",
    CO => b"CO",
    COLLECTION => b"Collection",
    COLLECTION_FIELD => b"CollectionField",
    COLLECTION_ITEM => b"CollectionItem",
    COLLECTION_SCHEMA => b"CollectionSchema",
    COLLECTION_SORT => b"CollectionSort",
    COLLECTION_SUBITEM => b"CollectionSubitem",
    COLOR => b"Color",
    COLORANTS => b"Colorants",
    COLORS => b"Colors",
    COLORSPACE => b"ColorSpace",
    COLOR_BURN => b"ColorBurn",
    COLOR_DODGE => b"ColorDodge",
    COLUMNS => b"Columns",
    COMPATIBLE => b"Compatible",
    COMPONENTS => b"Components",
    CONTACT_INFO => b"ContactInfo",
    CONTENTS => b"Contents",
    COORDS => b"Coords",
    COUNT => b"Count",
    CP => b"CP",
    CREATION_DATE => b"CreationDate",
    CREATOR => b"Creator",
    CRL => b"CRL",
    CRLS => b"CRLS",
    CROP_BOX => b"CropBox",
    CRYPT => b"Crypt",
    CS => b"CS",
    CYX => b"CYX",

    // D
    D => b"D",
    DA => b"DA",
    DARKEN => b"Darken",
    DATE => b"Date",
    DCT_DECODE => b"DCTDecode",
    DCT_DECODE_ABBREVIATION => b"DCT",
    DECODE => b"Decode",
    DECODE_PARMS => b"DecodeParms",
    DEFAULT => b"default",
    DEFAULT_CMYK => b"DefaultCMYK",
    DEFAULT_CRYPT_FILTER => b"DefaultCryptFilter",
    DEFAULT_GRAY => b"DefaultGray",
    DEFAULT_RGB => b"DefaultRGB",
    DESC => b"Desc",
    DESCENDANT_FONTS => b"DescendantFonts",
    DESCENT => b"Descent",
    DEST => b"Dest",
    DESTS => b"Dests",
    DEST_OUTPUT_PROFILE => b"DestOutputProfile",
    DEVICECMYK => b"DeviceCMYK",
    DEVICEGRAY => b"DeviceGray",
    DEVICEN => b"DeviceN",
    DEVICERGB => b"DeviceRGB",
    DEVICE_CMYK => b"DeviceCMYK",
    DEVICE_GRAY => b"DeviceGray",
    DEVICE_N => b"DeviceN",
    DEVICE_RGB => b"DeviceRGB",
    DI => b"Di",
    DIFFERENCE => b"Difference",
    DIFFERENCES => b"Differences",
    DIGEST_METHOD => b"DigestMethod",
    DIGEST_RIPEMD160 => b"RIPEMD160",
    DIGEST_SHA1 => b"SHA1",
    DIGEST_SHA256 => b"SHA256",
    DIGEST_SHA384 => b"SHA384",
    DIGEST_SHA512 => b"SHA512",
    DIRECTION => b"Direction",
    DISPLAY_DOC_TITLE => b"DisplayDocTitle",
    DL => b"DL",
    DM => b"Dm",
    DOC => b"Doc",
    DOCMDP => b"DocMDP",
    DOCUMENT => b"Document",
    DOC_CHECKSUM => b"DocChecksum",
    DOC_TIME_STAMP => b"DocTimeStamp",
    DOMAIN => b"Domain",
    DOS => b"DOS",
    DP => b"DP",
    DR => b"DR",
    DS => b"DS",
    DSS => b"DSS",
    DUPLEX => b"Duplex",
    DUR => b"Dur",
    DV => b"DV",
    DW => b"DW",
    DW2 => b"DW2",

    // E
    E => b"E",
    EARLY_CHANGE => b"EarlyChange",
    EF => b"EF",
    EMBEDDED_FDFS => b"EmbeddedFDFs",
    EMBEDDED_FILE => b"EmbeddedFile",
    EMBEDDED_FILES => b"EmbeddedFiles",
    EMPTY => b"",
    ENCODE => b"Encode",
    ENCODED_BYTE_ALIGN => b"EncodedByteAlign",
    ENCODING => b"Encoding",
    ENCODING_90MS_RKSJ_H => b"90ms-RKSJ-H",
    ENCODING_90MS_RKSJ_V => b"90ms-RKSJ-V",
    ENCODING_ETEN_B5_H => b"ETen-B5-H",
    ENCODING_ETEN_B5_V => b"ETen-B5-V",
    ENCRYPT => b"Encrypt",
    ENCRYPTED_PAYLOAD => b"EncryptedPayload",
    ENCRYPT_META_DATA => b"EncryptMetadata",
    END_OF_BLOCK => b"EndOfBlock",
    END_OF_LINE => b"EndOfLine",
    ENTRUST_PPKEF => b"Entrust.PPKEF",
    EXCLUSION => b"Exclusion",
    EXPORT => b"Export",
    EXPORT_STATE => b"ExportState",
    EXTEND => b"Extend",
    EXTENDS => b"Extends",
    EXTENSIONS => b"Extensions",
    EXTENSION_LEVEL => b"ExtensionLevel",
    EXT_G_STATE => b"ExtGState",
    EX_DATA => b"ExData",

    // F
    F => b"F",
    FB => b"FB",
    FDF => b"FDF",
    FF => b"Ff",
    FIELDS => b"Fields",
    FILESPEC => b"Filespec",
    FILTER => b"Filter",
    FIRST => b"First",
    FIRST_CHAR => b"FirstChar",
    FIT_WINDOW => b"FitWindow",
    FL => b"FL",
    FLAGS => b"Flags",
    FLATE_DECODE => b"FlateDecode",
    FLATE_DECODE_ABBREVIATION => b"Fl",
    FO => b"Fo",
    FOLDERS => b"Folders",
    FONT => b"Font",
    FONT_BBOX => b"FontBBox",
    FONT_DESC => b"FontDescriptor",
    FONT_FAMILY => b"FontFamily",
    FONT_FILE => b"FontFile",
    FONT_FILE2 => b"FontFile2",
    FONT_FILE3 => b"FontFile3",
    FONT_MATRIX => b"FontMatrix",
    FONT_NAME => b"FontName",
    FONT_STRETCH => b"FontStretch",
    FONT_WEIGHT => b"FontWeight",
    FORM => b"Form",
    FORMTYPE => b"FormType",
    FRM => b"FRM",
    FS => b"FS",
    FT => b"FT",
    FUNCTION => b"Function",
    FUNCTIONS => b"Functions",
    FUNCTION_TYPE => b"FunctionType",
    F_DECODE_PARMS => b"FDecodeParms",
    F_FILTER => b"FFilter",

    // G
    G => b"G",
    GAMMA => b"Gamma",
    GROUP => b"Group",
    GTS_PDFA1 => b"GTS_PDFA1",

    // H
    H => b"H",
    HARD_LIGHT => b"HardLight",
    HEIGHT => b"Height",
    HELV => b"Helv",
    HIDE_MENUBAR => b"HideMenubar",
    HIDE_TOOLBAR => b"HideToolbar",
    HIDE_WINDOWUI => b"HideWindowUI",
    HUE => b"Hue",

    // I
    I => b"I",
    IC => b"IC",
    ICCBASED => b"ICCBased",
    ICC_BASED => b"ICCBased",
    ID => b"ID",
    IDENTITY => b"Identity",
    IDENTITY_H => b"Identity-H",
    IDENTITY_V => b"Identity-V",
    ID_TREE => b"IDTree",
    IF => b"IF",
    ILLUSTRATOR => b"Illustrator",
    IM => b"IM",
    IMAGE => b"Image",
    IMAGE_MASK => b"ImageMask",
    INDEX => b"Index",
    INDEXED => b"Indexed",
    INFO => b"Info",
    INKLIST => b"InkList",
    INTENT => b"Intent",
    INTERPOLATE => b"Interpolate",
    IRT => b"IRT",
    ISSUER => b"Issuer",
    IT => b"IT",
    ITALIC_ANGLE => b"ItalicAngle",
    IX => b"IX",

    // J
    JAVA_SCRIPT => b"JavaScript",
    JBIG2_DECODE => b"JBIG2Decode",
    JBIG2_GLOBALS => b"JBIG2Globals",
    JPX_DECODE => b"JPXDecode",
    JS => b"JS",

    // K
    K => b"K",
    KEYWORDS => b"Keywords",
    KEY_USAGE => b"KeyUsage",
    KIDS => b"Kids",

    // L
    L => b"L",
    LAB => b"Lab",
    LANG => b"Lang",
    LAST => b"Last",
    LAST_CHAR => b"LastChar",
    LAST_MODIFIED => b"LastModified",
    LC => b"LC",
    LE => b"LE",
    LEADING => b"Leading",
    LEGAL_ATTESTATION => b"LegalAttestation",
    LENGTH => b"Length",
    LENGTH1 => b"Length1",
    LENGTH2 => b"Length2",
    LENGTH3 => b"Length3",
    LIGHTEN => b"Lighten",
    LIMITS => b"Limits",
    LINEARIZED => b"Linearized",
    LJ => b"LJ",
    LL => b"LL",
    LLE => b"LLE",
    LLO => b"LLO",
    LOCATION => b"Location",
    LUMINOSITY => b"Luminosity",
    LW => b"LW",
    LZW_DECODE => b"LZWDecode",
    LZW_DECODE_ABBREVIATION => b"LZW",

    // M
    M => b"M",
    MAC => b"Mac",
    MAC_EXPERT_ENCODING => b"MacExpertEncoding",
    MAC_ROMAN_ENCODING => b"MacRomanEncoding",
    MARK_INFO => b"MarkInfo",
    MASK => b"Mask",
    MATRIX => b"Matrix",
    MATTE => b"Matte",
    MAX_LEN => b"MaxLen",
    MAX_WIDTH => b"MaxWidth",
    MCID => b"MCID",
    MDP => b"MDP",
    MEASURE => b"Measure",
    MEDIA_BOX => b"MediaBox",
    METADATA => b"Metadata",
    MISSING_WIDTH => b"MissingWidth",
    MIX => b"Mix",
    MK => b"MK",
    ML => b"ML",
    MM_TYPE1 => b"MMType1",
    MOD_DATE => b"ModDate",
    MULTIPLY => b"Multiply",

    // N
    N => b"N",
    NAME => b"Name",
    NAMES => b"Names",
    NAVIGATOR => b"Navigator",
    NEED_APPEARANCES => b"NeedAppearances",
    NEW_WINDOW => b"NewWindow",
    NEXT => b"Next",
    NM => b"NM",
    NONE => b"None",
    NON_EFONT_NO_WARN => b"NonEFontNoWarn",
    NON_FULL_SCREEN_PAGE_MODE => b"NonFullScreenPageMode",
    NORMAL => b"Normal",
    NUMS => b"Nums",

    // O
    O => b"O",
    OBJ => b"Obj",
    OBJR => b"OBJR",
    OBJ_STM => b"ObjStm",
    OC => b"OC",
    OCG => b"OCG",
    OCGS => b"OCGs",
    OCMD => b"OCMD",
    OCPROPERTIES => b"OCProperties",
    OCSP => b"OCSP",
    OCSPS => b"OCSPs",
    OE => b"OE",
    OFF => b"OFF",
    OID => b"OID",
    ON => b"ON",
    OP => b"OP",
    OPEN_ACTION => b"OpenAction",
    OPEN_TYPE => b"OpenType",
    OPI => b"OPI",
    OPM => b"OPM",
    OPT => b"Opt",
    OP_NS => b"op",
    ORDER => b"Order",
    ORDERING => b"Ordering",
    OS => b"OS",
    OUTLINES => b"Outlines",
    OUTPUT_CONDITION => b"OutputCondition",
    OUTPUT_CONDITION_IDENTIFIER => b"OutputConditionIdentifier",
    OUTPUT_INTENT => b"OutputIntent",
    OUTPUT_INTENTS => b"OutputIntents",
    OVERLAY => b"Overlay",
    Off => b"Off",

    // P
    P => b"P",
    PA => b"PA",
    PAGE => b"Page",
    PAGES => b"Pages",
    PAGE_LABELS => b"PageLabels",
    PAGE_LAYOUT => b"PageLayout",
    PAGE_MODE => b"PageMode",
    PAINT_TYPE => b"PaintType",
    PANOSE => b"Panose",
    PARAMS => b"Params",
    PARENT => b"Parent",
    PARENT_TREE => b"ParentTree",
    PARENT_TREE_NEXT_KEY => b"ParentTreeNextKey",
    PART => b"Part",
    PATH => b"Path",
    PATTERN => b"Pattern",
    PATTERN_TYPE => b"PatternType",
    PC => b"PC",
    PDF_DOC_ENCODING => b"PDFDocEncoding",
    PERCEPTUAL => b"Perceptual",
    PERMS => b"Perms",
    PG => b"Pg",
    PI => b"PI",
    PIECE_INFO => b"PieceInfo",
    PO => b"PO",
    POPUP => b"Popup",
    PREDICTOR => b"Predictor",
    PREV => b"Prev",
    PRE_RELEASE => b"PreRelease",
    PRINT => b"Print",
    PRINT_AREA => b"PrintArea",
    PRINT_CLIP => b"PrintClip",
    PRINT_SCALING => b"PrintScaling",
    PRINT_STATE => b"PrintState",
    PRIVATE => b"Private",
    PROCESS => b"Process",
    PROC_SET => b"ProcSet",
    PRODUCER => b"Producer",
    PROPERTIES => b"Properties",
    PROP_BUILD => b"Prop_Build",
    PS => b"PS",
    PT_DATA => b"PtData",
    PUB_SEC => b"PubSec",
    PV => b"PV",

    // Q
    Q => b"Q",
    QUADPOINTS => b"QuadPoints",

    // R
    R => b"R",
    RANGE => b"Range",
    RC => b"RC",
    RD => b"RD",
    REASON => b"Reason",
    REASONS => b"Reasons",
    RECIPIENTS => b"Recipients",
    RECT => b"Rect",
    REF => b"Ref",
    REFERENCE => b"Reference",
    REGISTRY => b"Registry",
    REGISTRY_NAME => b"RegistryName",
    RELATIVE_COLORIMETRIC => b"RelativeColorimetric",
    RENAME => b"Rename",
    REPEAT => b"Repeat",
    RESOURCES => b"Resources",
    RES_FORK => b"ResFork",
    RGB => b"RGB",
    RI => b"RI",
    ROLE_MAP => b"RoleMap",
    ROOT => b"Root",
    ROTATE => b"Rotate",
    ROWS => b"Rows",
    RT => b"RT",
    RUN_LENGTH_DECODE => b"RunLengthDecode",
    RUN_LENGTH_DECODE_ABBREVIATION => b"RL",
    RV => b"RV",

    // S
    S => b"S",
    SA => b"SA",
    SATURATION => b"Saturation",
    SCHEMA => b"Schema",
    SCREEN => b"Screen",
    SE => b"SE",
    SEPARATION => b"Separation",
    SET_F => b"SetF",
    SET_FF => b"SetFf",
    SHADING => b"Shading",
    SHADING_TYPE => b"ShadingType",
    SIG => b"Sig",
    SIG_FLAGS => b"SigFlags",
    SIG_REF => b"SigRef",
    SIZE => b"Size",
    SM => b"SM",
    SMASK => b"SMask",
    SMASK_IN_DATA => b"SMaskInData",
    SOFT_LIGHT => b"SoftLight",
    SORT => b"Sort",
    SOUND => b"Sound",
    SPLIT => b"Split",
    SS => b"SS",
    ST => b"St",
    STANDARD_ENCODING => b"StandardEncoding",
    STATE => b"State",
    STATE_MODEL => b"StateModel",
    STATUS => b"Status",
    STD_CF => b"StdCF",
    STEM_H => b"StemH",
    STEM_V => b"StemV",
    STM_F => b"StmF",
    STRUCT_ELEM => b"StructElem",
    STRUCT_PARENT => b"StructParent",
    STRUCT_PARENTS => b"StructParents",
    STRUCT_TREE_ROOT => b"StructTreeRoot",
    STR_F => b"StrF",
    STYLE => b"Style",
    SUBJ => b"Subj",
    SUBJECT => b"Subject",
    SUBJECT_DN => b"SubjectDN",
    SUBTYPE => b"Subtype",
    SUB_FILTER => b"SubFilter",
    SUPPLEMENT => b"Supplement",
    SV => b"SV",
    SV_CERT => b"SVCert",
    SW => b"SW",
    SY => b"Sy",
    SYNCHRONOUS => b"Synchronous",

    // T
    T => b"T",
    TARGET => b"Target",
    TEMPLATES => b"Templates",
    THREAD => b"Thread",
    THREADS => b"Threads",
    THREE_DD => b"3DD",
    THUMB => b"Thumb",
    TI => b"TI",
    TILING_TYPE => b"TilingType",
    TIME_STAMP => b"TimeStamp",
    TITLE => b"Title",
    TK => b"TK",
    TM => b"TM",
    TO_UNICODE => b"ToUnicode",
    TR => b"TR",
    TR2 => b"TR2",
    TRANS => b"Trans",
    TRANSFORM_METHOD => b"TransformMethod",
    TRANSFORM_PARAMS => b"TransformParams",
    TRANSPARENCY => b"Transparency",
    TRAPPED => b"Trapped",
    TREF => b"TRef",
    TRIM_BOX => b"TrimBox",
    TRUE_TYPE => b"TrueType",
    TRUSTED_MODE => b"TrustedMode",
    TU => b"TU",
    TX => b"Tx",
    TYPE => b"Type",
    TYPE0 => b"Type0",
    TYPE1 => b"Type1",
    TYPE3 => b"Type3",

    // U
    U => b"U",
    UE => b"UE",
    UF => b"UF",
    UNCHANGED => b"Unchanged",
    UNIX => b"Unix",
    URI => b"URI",
    URL => b"URL",
    URL_TYPE => b"URLType",
    USAGE => b"Usage",
    USER_UNIT => b"UserUnit",
    USE_CMAP => b"UseCMap",

    // V
    V => b"V",
    VE => b"VE",
    VERISIGN_PPKVS => b"VeriSign.PPKVS",
    VERSION => b"Version",
    VERTICES => b"Vertices",
    VERTICES_PER_ROW => b"VerticesPerRow",
    VIEW => b"View",
    VIEWER_PREFERENCES => b"ViewerPreferences",
    VIEW_AREA => b"ViewArea",
    VIEW_CLIP => b"ViewClip",
    VIEW_STATE => b"ViewState",
    VOLUME => b"Volume",
    VP => b"VP",
    VRI => b"VRI",

    // W
    W => b"W",
    W2 => b"W2",
    WC => b"WC",
    WHITE_POINT => b"WhitePoint",
    WIDGET => b"Widget",
    WIDTH => b"Width",
    WIDTHS => b"Widths",
    WIN => b"Win",
    WIN_ANSI_ENCODING => b"WinAnsiEncoding",
    WMODE => b"WMode",
    WP => b"WP",
    WS => b"WS",

    // X
    X => b"X",
    XFA => b"XFA",
    XHEIGHT => b"XHeight",
    XOBJECT => b"XObject",
    XREF => b"XRef",
    XREF_STM => b"XRefStm",
    X_STEP => b"XStep",

    // Y
    Y => b"Y",
    YES => b"Yes",
    Y_STEP => b"YStep",

    // Z
    ZA_DB => b"ZaDb",
}
