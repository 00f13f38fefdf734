//! Fixed tables used by the MARS key schedule and round functions.
//!
//! `S` is the published 512-word MARS S-box: S0 is the first half, S1 the
//! second. Its words come from SHA-1 over `(5i, 0xB7E15162, 0x243F6A88,
//! 0x02917D59)`, with nine entries multiplied by 3 so that any two words of a
//! half differ in at least three bytes.

pub const S: [u32; 512] = [
    // S0
    0x09D0_C479, 0x28C8_FFE0, 0x84AA_6C39, 0x9DAD_7287,
    0x7DFF_9BE3, 0xD426_8361, 0xC96D_A1D4, 0x7974_CC93,
    0x85D0_582E, 0x2A4B_5705, 0x1CA1_6A62, 0xC3BD_279D,
    0x0F1F_25E5, 0x5160_372F, 0xC695_C1FB, 0x4D7F_F1E4,
    0xAE5F_6BF4, 0x0D72_EE46, 0xFF23_DE8A, 0xB1CF_8E83,
    0xF149_02E2, 0x3E98_1E42, 0x8BF5_3EB6, 0x7F4B_F8AC,
    0x8363_1F83, 0x2597_0205, 0x76AF_E784, 0x3A79_31D4,
    0x4F84_6450, 0x5C64_C3F6, 0x210A_5F18, 0xC698_6A26,
    0x28F4_E826, 0x3A60_A81C, 0xD340_A664, 0x7EA8_20C4,
    0x5266_87C5, 0x7EDD_D12B, 0x32A1_1D1D, 0x9C9E_F086,
    0x80F6_E831, 0xAB6F_04AD, 0x56FB_9B53, 0x8B2E_095C,
    0xB685_56AE, 0xD225_0B0D, 0x294A_7721, 0xE21F_B253,
    0xAE13_6749, 0xE82A_AE86, 0x9336_5104, 0x9940_4A66,
    0x78A7_84DC, 0xB69B_A84B, 0x0404_6793, 0x23DB_5C1E,
    0x46CA_E1D6, 0x2FE2_8134, 0x5A22_3942, 0x1863_CD5B,
    0xC190_C6E3, 0x07DF_B846, 0x6EB8_8816, 0x2D0D_CC4A,
    0xA4CC_AE59, 0x3798_670D, 0xCBFA_9493, 0x4F48_1D45,
    0xEAFC_8CA8, 0xDB11_29D6, 0xB044_9E20, 0x0F54_07FB,
    0x6167_D9A8, 0xD1F4_5763, 0x4DAA_96C3, 0x3BEC_5958,
    0xABAB_A014, 0xB6CC_D201, 0x38D6_279F, 0x0268_2215,
    0x8F37_6CD5, 0x092C_237E, 0xBFC5_6593, 0x3288_9D2C,
    0x854B_3E95, 0x05BB_9B43, 0x7DCD_5DCD, 0xA02E_926C,
    0xFAE5_27E5, 0x36A1_C330, 0x3412_E1AE, 0xF257_F462,
    0x3C4F_1D71, 0x30A2_E809, 0x68E5_F551, 0x9C61_BA44,
    0x5DED_0AB8, 0x75CE_09C8, 0x9654_F93E, 0x698C_0CCA,
    0x243C_B3E4, 0x2B06_2B97, 0x0F3B_8D9E, 0x00E0_50DF,
    0xFC5D_6166, 0xE35F_9288, 0xC079_550D, 0x0591_AEE8,
    0x8E53_1E74, 0x75FE_3578, 0x2F6D_829A, 0xF60B_21AE,
    0x95E8_EB8D, 0x6699_486B, 0x901D_7D9B, 0xFD6D_6E31,
    0x1090_ACEF, 0xE067_0DD8, 0xDAB2_E692, 0xCD6D_4365,
    0xE539_3514, 0x3AF3_45F0, 0x6241_FC4D, 0x460D_A3A3,
    0x7BCF_3729, 0x8BF1_D1E0, 0x14AA_C070, 0x1587_ED55,
    0x3AFD_7D3E, 0xD2F2_9E01, 0x29A9_D1F6, 0xEFB1_0C53,
    0xCF3B_870F, 0xB414_935C, 0x6644_65ED, 0x024A_CAC7,
    0x59A7_44C1, 0x1D29_36A7, 0xDC58_0AA6, 0xCF57_4CA8,
    0x040A_7A10, 0x6CD8_1807, 0x8A98_BE4C, 0xACCE_A063,
    0xC33E_92B5, 0xD1E0_E03D, 0xB322_517E, 0x2092_BD13,
    0x386B_2C4A, 0x52E8_DD58, 0x5865_6DFB, 0x5082_0371,
    0x4181_1896, 0xE337_EF7E, 0xD39F_B119, 0xC97F_0DF6,
    0x68FE_A01B, 0xA150_A6E5, 0x5525_8962, 0xEB6F_F41B,
    0xD7C9_CD7A, 0xA619_CD9E, 0xBCF0_9576, 0x2672_C073,
    0xF003_FB3C, 0x4AB7_A50B, 0x1484_126A, 0x487B_A9B1,
    0xA64F_C9C6, 0xF695_7D49, 0x38B0_6A75, 0xDD80_5FCD,
    0x63D0_94CF, 0xF51C_999E, 0x1AA4_D343, 0xB849_5294,
    0xCE9F_8E99, 0xBFFC_D770, 0xC7C2_75CC, 0x3784_53A7,
    0x7B21_BE33, 0x397F_41BD, 0x4E94_D131, 0x92CC_1F98,
    0x5915_EA51, 0x99F8_61B7, 0xC998_0A88, 0x1D74_FD5F,
    0xB0A4_95F8, 0x614D_EED0, 0xB577_8EEA, 0x5941_792D,
    0xFA90_C1F8, 0x33F8_24B4, 0xC496_5372, 0x3FF6_D550,
    0x4CA5_FEC0, 0x8630_E964, 0x5B3F_BBD6, 0x7DA2_6A48,
    0xB203_231A, 0x0429_7514, 0x2D63_9306, 0x2EB1_3149,
    0x16A4_5272, 0x5324_59A0, 0x8E5F_4872, 0xF966_C7D9,
    0x0712_8DC0, 0x0D44_DB62, 0xAFC8_D52D, 0x0631_6131,
    0xD838_E7CE, 0x1BC4_1D00, 0x3A2E_8C0F, 0xEA83_837E,
    0xB984_737D, 0x13BA_4891, 0xC4F8_B949, 0xA6D6_ACB3,
    0xA215_CDCE, 0x8359_838B, 0x6BD1_AA31, 0xF579_DD52,
    0x21B9_3F93, 0xF517_6781, 0x187D_FDDE, 0xE94A_EB76,
    0x2B38_FD54, 0x431D_E1DA, 0xAB39_4825, 0x9AD3_048F,
    0xDFEA_32AA, 0x6594_73E3, 0x623F_7863, 0xF334_6C59,
    0xAB3A_B685, 0x3346_A90B, 0x6B56_443E, 0xC6DE_01F8,
    0x8D42_1FC0, 0x9B0E_D10C, 0x88F1_A1E9, 0x54C1_F029,
    0x7DEA_D57B, 0x8D7B_A426, 0x4CF5_178A, 0x551A_7CCA,
    0x1A9A_5F08, 0xFCD6_51B9, 0x2560_5182, 0xE11F_C6C3,
    0xB6FD_9676, 0x337B_3027, 0xB7C8_EB14, 0x9E5F_D030,
    // S1
    0x6B57_E354, 0xAD91_3CF7, 0x7E16_688D, 0x5887_2A69,
    0x2C2F_C7DF, 0xE389_CCC6, 0x3073_8DF1, 0x0824_A734,
    0xE179_7A8B, 0xA4A8_D57B, 0x5B5D_193B, 0xC8A8_309B,
    0x73F9_A978, 0x7339_8D32, 0x0F59_573E, 0xE9DF_2B03,
    0xE8A5_B6C8, 0x848D_0704, 0x98DF_93C2, 0x720A_1DC3,
    0x684F_259A, 0x943B_A848, 0xA637_0152, 0x863B_5EA3,
    0xD17B_978B, 0x6D9B_58EF, 0x0A70_0DD4, 0xA73D_36BF,
    0x8E6A_0829, 0x8695_BC14, 0xE35B_3447, 0x933A_C568,
    0x8894_B022, 0x2F51_1C27, 0xDDFB_CC3C, 0x0066_62B6,
    0x117C_83FE, 0x4E12_B414, 0xC2BC_A766, 0x3A2F_EC10,
    0xF456_2420, 0x5579_2E2A, 0x46F5_D857, 0xCEDA_25CE,
    0xC360_1D3B, 0x6C00_AB46, 0xEFAC_9C28, 0xB3C3_5047,
    0x611D_FEE3, 0x257C_3207, 0xFDD5_8482, 0x3B14_D84F,
    0x23BE_CB64, 0xA075_F3A3, 0x088F_8EAD, 0x07AD_F158,
    0x7796_943C, 0xFACA_BF3D, 0xC097_30CD, 0xF767_9969,
    0xDA44_E9ED, 0x2C85_4C12, 0x3593_5FA3, 0x2F05_7D9F,
    0x6906_24F8, 0x1CB0_BAFD, 0x7B0D_BDC6, 0x810F_23BB,
    0xFA92_9A1A, 0x6D96_9A17, 0x6742_979B, 0x74AC_7D05,
    0x010E_65C4, 0x86A3_D963, 0xF907_B5A0, 0xD004_2BD3,
    0x158D_7D03, 0x287A_8255, 0xBBA8_366F, 0x096E_DC33,
    0x2191_6A7B, 0x77B5_6B86, 0x9516_22F9, 0xA6C5_E650,
    0x8CEA_17D1, 0xCD8C_62BC, 0xA3D6_3433, 0x358A_68FD,
    0x0F9B_9D3C, 0xD6AA_295B, 0xFE33_384A, 0xC000_738E,
    0xCD67_EB2F, 0xE2EB_6DC2, 0x9733_8B02, 0x06C9_F246,
    0x419C_F1AD, 0x2B83_C045, 0x3723_F18A, 0xCB5B_3089,
    0x160B_EAD7, 0x5D49_4656, 0x35F8_A74B, 0x1E4E_6C9E,
    0x0003_99BD, 0x6746_6880, 0xB417_4831, 0xACF4_23B2,
    0xCA81_5AB3, 0x5A63_95E7, 0x302A_67C5, 0x8BDB_446B,
    0x108F_8FA4, 0x1022_3EDA, 0x92B8_B48B, 0x7F38_D0EE,
    0xAB27_01D4, 0x0262_D415, 0xAF22_4A30, 0xB3D8_8ABA,
    0xF8B2_C3AF, 0xDAF7_EF70, 0xCC97_D3B7, 0xE961_4B6C,
    0x2BAE_BFF4, 0x70F6_87CF, 0x386C_9156, 0xCE09_2EE5,
    0x01E8_7DA6, 0x6CE9_1E6A, 0xBB7B_CC84, 0xC792_2C20,
    0x9D3B_71FD, 0x060E_41C6, 0xD759_0F15, 0x4E03_BB47,
    0x183C_198E, 0x63EE_B240, 0x2DDB_F49A, 0x6D5C_BA54,
    0x9237_50AF, 0xF9E1_4236, 0x7838_162B, 0x5972_6C72,
    0x81B6_6760, 0xBB29_26C1, 0x48A0_CE0D, 0xA6C0_496D,
    0xAD43_507B, 0x718D_496A, 0x9DF0_57AF, 0x44B1_BDE6,
    0x0543_56DC, 0xDE7C_ED35, 0xD51A_138B, 0x6208_8CC9,
    0x3583_0311, 0xC96E_FCA2, 0x686F_86EC, 0x8E77_CB68,
    0x63E1_D6B8, 0xC80F_9778, 0x79C4_91FD, 0x1B4C_67F2,
    0x7269_8D7D, 0x5E36_8C31, 0xF7D9_5E2E, 0xA1D3_493F,
    0xDCD9_433E, 0x896F_1552, 0x4BC4_CA7A, 0xA6D1_BAF4,
    0xA5A9_6DCC, 0x0BEF_8B46, 0xA169_FDA7, 0x74DF_40B7,
    0x4E20_8804, 0x9A75_6607, 0x038E_87C8, 0x2021_1E44,
    0x8B7A_D4BF, 0xC640_3F35, 0x1848_E36D, 0x80BD_B038,
    0x1E62_891C, 0x643D_2107, 0xBF04_D6F8, 0x2109_2C8C,
    0xF644_F389, 0x0778_404E, 0x7B78_ADB8, 0xA2C5_2D53,
    0x4215_7ABE, 0xA225_3E2E, 0x7BF3_F4AE, 0x80F5_94F9,
    0x9531_94E7, 0x77EB_92ED, 0xB381_6930, 0xDA8D_9336,
    0xBF44_7469, 0xF26D_9483, 0xEE6F_AED5, 0x7137_1235,
    0xDE42_5F73, 0xB4E5_9F43, 0x7DBE_2D4E, 0x2D37_B185,
    0x49DC_9A63, 0x98C3_9D98, 0x1301_C9A2, 0x389B_1BBF,
    0x0C18_588D, 0xA421_C1BA, 0x7AA3_865C, 0x71E0_8558,
    0x3C5C_FCAA, 0x7D23_9CA4, 0x0297_D9DD, 0xD7DC_2830,
    0x4B37_802B, 0x7428_AB54, 0xAEEE_0347, 0x4B3F_BB85,
    0x692F_2F08, 0x134E_578E, 0x36D9_E0BF, 0xAE8B_5FCF,
    0xEDB9_3ECF, 0x2B27_248E, 0x170E_B1EF, 0x7DC5_7FD6,
    0x1E76_0F16, 0xB113_6601, 0x864E_1B9B, 0xD7EA_7319,
    0x3AB8_71BD, 0xCFA4_D76F, 0xE31B_D782, 0x0DBE_B469,
    0xABB9_6061, 0x5370_F85D, 0xFFB0_7E37, 0xDA30_D0FB,
    0xEBC9_77B6, 0x0B98_B40F, 0x3A4D_0FE6, 0xDF4F_C26B,
    0x159C_F22A, 0xC298_D6E2, 0x2B78_EF6A, 0x61A9_4AC0,
    0xAB56_1187, 0x14EE_A0F0, 0xDF0D_4164, 0x19AF_70EE,
];

/// Patterns XORed into weak multiplication keys; they are `S[265..269]`.
pub const B: [u32; 4] = [0xA4A8_D57B, 0x5B5D_193B, 0xC8A8_309B, 0x73F9_A978];

/// S0 lookup on the low byte of `x`.
#[inline]
pub fn s0(x: u32) -> u32 {
    S[(x & 0xFF) as usize]
}

/// S1 lookup on the low byte of `x`.
#[inline]
pub fn s1(x: u32) -> u32 {
    S[256 + (x & 0xFF) as usize]
}
