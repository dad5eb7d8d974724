// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Precomputed IIR coefficient tables
//!
//! 4th-order Butterworth designs (bilinear transform, direct form `b`/`a`,
//! `a[0] == 1`) for every integer sampling rate from 9 Hz to 64 Hz:
//!
//! - low-pass, 4 Hz cut-off (240 BPM)
//! - high-pass, 0.5 Hz cut-off (30 BPM)
//!
//! 8 Hz is absent from both tables: its Nyquist frequency equals the
//! low-pass cut-off.

/// One row of a coefficient table
#[derive(Debug)]
pub(crate) struct TableEntry {
    pub rate: u32,
    pub b: [f64; 5],
    pub a: [f64; 5],
}

/// Lowest sampling rate (Hz) present in the tables
pub const MIN_TABLE_RATE: u32 = 9;

/// Highest sampling rate (Hz) present in the tables
pub const MAX_TABLE_RATE: u32 = 64;

/// Number of rows in each table
pub const TABLE_LEN: usize = 56;

/// Low-pass coefficients, 4 Hz cut-off
#[rustfmt::skip]
pub(crate) static LOW_PASS_TABLE: [TableEntry; TABLE_LEN] = [
    TableEntry {
        rate: 9,
        b: [0.6320277513755171, 2.5281110055020686, 3.7921665082531026, 2.5281110055020686, 0.6320277513755171],
        a: [1.0, 3.089990695845609, 3.6616502218321907, 1.9613436525522183, 0.3994594517782576],
    },
    TableEntry {
        rate: 10,
        b: [0.43284664499029174, 1.731386579961167, 2.5970798699417506, 1.731386579961167, 0.43284664499029174],
        a: [1.0, 2.3695130071820376, 2.3139884144158795, 1.0546654058785674, 0.18737949236818488],
    },
    TableEntry {
        rate: 11,
        b: [0.31271156099955677, 1.250846243998227, 1.8762693659973406, 1.250846243998227, 0.31271156099955677],
        a: [1.0, 1.7871390753118397, 1.5125367028883079, 0.6057356570358481, 0.09797354075691123],
    },
    TableEntry {
        rate: 12,
        b: [0.2346994953098306, 0.9387979812393225, 1.4081969718589837, 0.9387979812393225, 0.2346994953098306],
        a: [1.0, 1.3066051441010482, 1.030453835419574, 0.36236904476885756, 0.05576390066780879],
    },
    TableEntry {
        rate: 13,
        b: [0.18126561581802614, 0.7250624632721046, 1.0875936949081568, 0.7250624632721046, 0.18126561581802614],
        a: [1.0, 0.9028263768341138, 0.744753120322573, 0.21812003093473045, 0.03455032499699983],
    },
    TableEntry {
        rate: 14,
        b: [0.1431649770765904, 0.5726599083063616, 0.8589898624595425, 0.5726599083063616, 0.1431649770765904],
        a: [1.0, 0.5582616673738976, 0.5846953973730142, 0.12383359234675818, 0.023848976131775834],
    },
    TableEntry {
        rate: 15,
        b: [0.11513202854443748, 0.4605281141777499, 0.6907921712666248, 0.4605281141777499, 0.11513202854443748],
        a: [1.0, 0.26037697448816177, 0.5074652153785388, 0.055288349295378764, 0.018981917548920528],
    },
    TableEntry {
        rate: 16,
        b: [0.09398085143379444, 0.37592340573517774, 0.5638851086027666, 0.37592340573517774, 0.09398085143379444],
        a: [1.0, -2.498001805406602e-16, 0.4860288220682694, -6.63518679012922e-17, 0.01766480087244189],
    },
    TableEntry {
        rate: 17,
        b: [0.07768871671220617, 0.3107548668488247, 0.46613230027323704, 0.3107548668488247, 0.07768871671220617],
        a: [1.0, -0.2297364550709261, 0.5027156078130899, -0.048648510645529996, 0.01868882529866446],
    },
    TableEntry {
        rate: 18,
        b: [0.06492012387645468, 0.25968049550581873, 0.3895207432587281, 0.25968049550581873, 0.06492012387645468],
        a: [1.0, -0.43408162849066034, 0.5456444694642824, -0.09420494098115184, 0.021364082030804907],
    },
    TableEntry {
        rate: 19,
        b: [0.05476428123849373, 0.21905712495397492, 0.3285856874309624, 0.21905712495397492, 0.05476428123849373],
        a: [1.0, -0.6171228610854469, 0.6066416026165709, -0.1385572587983312, 0.025267017083106785],
    },
    TableEntry {
        rate: 20,
        b: [0.046582906636443676, 0.1863316265457747, 0.27949743981866204, 0.1863316265457747, 0.046582906636443676],
        a: [1.0, -0.7820951980233375, 0.6799785269162993, -0.18267569775303233, 0.030118875043169246],
    },
    TableEntry {
        rate: 21,
        b: [0.039918207649049124, 0.1596728305961965, 0.23950924589429473, 0.1596728305961965, 0.039918207649049124],
        a: [1.0, -0.9315963013283055, 0.761580723691365, -0.227017241543926, 0.03572414156565227],
    },
    TableEntry {
        rate: 22,
        b: [0.034435223657192364, 0.13774089462876946, 0.20661134194315417, 0.13774089462876946, 0.034435223657192364],
        a: [1.0, -1.0677388072850682, 0.8485165301574332, -0.2717520648783761, 0.0419379205210892],
    },
    TableEntry {
        rate: 23,
        b: [0.02988457120809867, 0.11953828483239468, 0.179307427248592, 0.11953828483239468, 0.02988457120809867],
        a: [1.0, -1.1922604587794572, 0.938658478025234, -0.31689277113989656, 0.04864789122369838],
    },
    TableEntry {
        rate: 24,
        b: [0.026077721701092293, 0.10431088680436917, 0.15646633020655376, 0.10431088680436917, 0.026077721701092293],
        a: [1.0, -1.306605144101049, 1.030453835419575, -0.36236904476885795, 0.05576390066780887],
    },
    TableEntry {
        rate: 25,
        b: [0.02287020771629096, 0.09148083086516384, 0.13722124629774576, 0.09148083086516384, 0.02287020771629096],
        a: [1.0, -1.4119835011965778, 1.1227660808212196, -0.4080709518802401, 0.0632116957162537],
    },
    TableEntry {
        rate: 26,
        b: [0.020149977547047965, 0.08059991018819186, 0.1208998652822878, 0.08059991018819186, 0.020149977547047965],
        a: [1.0, -1.5094189117618368, 1.2147634962658322, -0.4538739188478398, 0.07092897509661182],
    },
    TableEntry {
        rate: 27,
        b: [0.017829170397804486, 0.07131668159121794, 0.1069750223868269, 0.07131668159121794, 0.017829170397804486],
        a: [1.0, -1.599782877074889, 1.3058396911821752, -0.49965287179745954, 0.07886278405504472],
    },
    TableEntry {
        rate: 28,
        b: [0.015838211515958198, 0.06335284606383279, 0.09502926909574919, 0.06335284606383279, 0.015838211515958198],
        a: [1.0, -1.6838225599041345, 1.3955561514791184, -0.5452899196719522, 0.08696771235229937],
    },
    TableEntry {
        rate: 29,
        b: [0.014121509932267818, 0.05648603972907127, 0.08472905959360691, 0.05648603972907127, 0.014121509932267818],
        a: [1.0, -1.7621824664369234, 1.4836002238793857, -0.5906781886088012, 0.09520459008262369],
    },
    TableEntry {
        rate: 30,
        b: [0.012634281782244282, 0.05053712712897713, 0.0758056906934657, 0.05053712712897713, 0.012634281782244282],
        a: [1.0, -1.8354216889282893, 1.5697540717662188, -0.6357233780979851, 0.10353950377596405],
    },
    TableEntry {
        rate: 31,
        b: [0.011340176126512141, 0.045360704506048566, 0.06804105675907285, 0.045360704506048566, 0.011340176126512141],
        a: [1.0, -1.904027745962207, 1.6538715296093818, -0.6803439925270736, 0.11194302690409325],
    },
    TableEntry {
        rate: 32,
        b: [0.010209480791203138, 0.04083792316481255, 0.061256884747218826, 0.04083792316481255, 0.010209480791203138],
        a: [1.0, -1.9684277869385185, 1.7358607092088867, -0.7244708295073626, 0.12038959989624451],
    },
    TableEntry {
        rate: 33,
        b: [0.009217752691891633, 0.036871010767566534, 0.0553065161513498, 0.036871010767566534, 0.009217752691891633],
        a: [1.0, -2.028997734390977, 1.8156708379042013, -0.7680460791390671, 0.12885701869610866],
    },
    TableEntry {
        rate: 34,
        b: [0.008344762389720446, 0.03337904955888178, 0.05006857433832267, 0.03337904955888178, 0.008344762389720446],
        a: [1.0, -2.0860697981103424, 1.8932822396093165, -0.8110222484137445, 0.13732600515029747],
    },
    TableEntry {
        rate: 35,
        b: [0.007573673729383795, 0.03029469491753518, 0.04544204237630277, 0.03029469491753518, 0.007573673729383795],
        a: [1.0, -2.139938692798899, 1.9686986695130342, -0.8533610382436037, 0.14577984119960913],
    },
    TableEntry {
        rate: 36,
        b: [0.006890401067214046, 0.027561604268856184, 0.04134240640328428, 0.027561604268856184, 0.006890401067214046],
        a: [1.0, -2.190866815260134, 2.0419414248390124, -0.8950322467572438, 0.1542040542537898],
    },
    TableEntry {
        rate: 37,
        b: [0.006283101875179007, 0.025132407500716027, 0.03769861125107404, 0.025132407500716027, 0.006283101875179007],
        a: [1.0, -2.239088580454718, 2.11304480497996, -0.9360127391104434, 0.16258614458806525],
    },
    TableEntry {
        rate: 38,
        b: [0.005741773411723963, 0.02296709364689585, 0.034450640470343775, 0.02296709364689585, 0.005741773411723963],
        a: [1.0, -2.2848140729195086, 2.1820526031291068, -0.9762855034949645, 0.1709153478729499],
    },
    TableEntry {
        rate: 39,
        b: [0.005257930020652432, 0.02103172008260973, 0.03154758012391459, 0.02103172008260973, 0.005257930020652432],
        a: [1.0, -2.3282321373719044, 2.249015390749294, -1.0158388005371888, 0.17918242749023822],
    },
    TableEntry {
        rate: 40,
        b: [0.004824343357716228, 0.019297373430864913, 0.02894606014629737, 0.019297373430864913, 0.004824343357716228],
        a: [1.0, -2.3695130071820376, 2.31398841441588, -1.0546654058785676, 0.1873794923681849],
    },
    TableEntry {
        rate: 41,
        b: [0.004434832068887252, 0.01773932827554901, 0.026608992413323512, 0.01773932827554901, 0.004434832068887252],
        a: [1.0, -2.4088105498957257, 2.377029967680704, -1.0927619415344427, 0.1954998368516604],
    },
    TableEntry {
        rate: 42,
        b: [0.004084090581862281, 0.016336362327449123, 0.024504543491173685, 0.016336362327449123, 0.004084090581862281],
        a: [1.0, -2.4462641937511638, 2.43820013278844, -1.1301282894368303, 0.20353779970935054],
    },
    TableEntry {
        rate: 43,
        b: [0.0037675490223794735, 0.015070196089517894, 0.02260529413427684, 0.015070196089517894, 0.0037675490223794735],
        a: [1.0, -2.4820005871364517, 2.4975598112765747, -1.1667670796149239, 0.21148863983287242],
    },
    TableEntry {
        rate: 44,
        b: [0.003481258040986679, 0.013925032163946716, 0.020887548245920075, 0.013925032163946716, 0.003481258040986679],
        a: [1.0, -2.5161350334288386, 2.5551699808079205, -1.202683245265268, 0.21934842654197326],
    },
    TableEntry {
        rate: 45,
        b: [0.0032217936851188654, 0.012887174740475462, 0.019330762110713193, 0.012887174740475462, 0.0032217936851188654],
        a: [1.0, -2.5487727360755494, 2.6110911295359838, -1.2378836372002642, 0.2271139427017318],
    },
    TableEntry {
        rate: 46,
        b: [0.002986178484648292, 0.011944713938593168, 0.01791707090788975, 0.011944713938593168, 0.002986178484648292],
        a: [1.0, -2.5800098826940747, 2.6653828299906883, -1.272376690641317, 0.23478259909907614],
    },
    TableEntry {
        rate: 47,
        b: [0.00277181571567752, 0.01108726286271008, 0.01663089429406512, 0.01108726286271008, 0.00277181571567752],
        a: [1.0, -2.6099345920626567, 2.718103422702315, -1.3061721379174536, 0.24235235872863556],
    },
    TableEntry {
        rate: 48,
        b: [0.0025764344253226203, 0.010305737701290481, 0.015458606551935723, 0.010305737701290481, 0.0025764344253226203],
        a: [1.0, -2.6386277438912478, 2.769309786151488, -1.339280761265205, 0.2498216698101263],
    },
    TableEntry {
        rate: 49,
        b: [0.002398043282486444, 0.009592173129945775, 0.014388259694918663, 0.009592173129945775, 0.002398043282486444],
        a: [1.0, -2.6661637080179714, 2.8190571745858493, -1.3717141805551163, 0.2571894065070217],
    },
    TableEntry {
        rate: 50,
        b: [0.002234891698082326, 0.008939566792329304, 0.013409350188493957, 0.008939566792329304, 0.002234891698082326],
        a: [1.0, -2.692610987017435, 2.86739910911139, -1.4034846713681417, 0.26445481644350444],
    },
    TableEntry {
        rate: 51,
        b: [0.0020854369567693313, 0.008341747827077325, 0.012512621740615987, 0.008341747827077325, 0.0020854369567693313],
        a: [1.0, -2.7180327840191123, 2.9143873104981464, -1.4346050093977218, 0.27161747422699706],
    },
    TableEntry {
        rate: 52,
        b: [0.0019483163390565364, 0.0077932653562261455, 0.011689898034339218, 0.0077932653562261455, 0.0019483163390565364],
        a: [1.0, -2.742487505725276, 2.9600716645253358, -1.465088337654678, 0.2786772402795228],
    },
    TableEntry {
        rate: 53,
        b: [0.0018223234013332937, 0.007289293605333175, 0.010933940407999762, 0.007289293605333175, 0.0018223234013332937],
        a: [1.0, -2.7660292091165104, 3.0045002125739426, -1.4949480534009325, 0.28563422436483304],
    },
    TableEntry {
        rate: 54,
        b: [0.0017063877324541448, 0.006825550929816579, 0.01023832639472487, 0.006825550929816579, 0.0017063877324541448],
        a: [1.0, -2.7887079990815815, 3.0477191616658654, -1.5241977121364332, 0.2924887532714155],
    },
    TableEntry {
        rate: 55,
        b: [0.0015995576269919691, 0.0063982305079678765, 0.009597345761951814, 0.0063982305079678765, 0.0015995576269919691],
        a: [1.0, -2.8105703831616644, 3.089772909332595, -1.552850946314606, 0.29924134217554726],
    },
    TableEntry {
        rate: 56,
        b: [0.0015009852133819814, 0.0060039408535279256, 0.009005911280291889, 0.0060039408535279256, 0.0015009852133819814],
        a: [1.0, -2.83165958872003, 3.130704079638777, -1.5809213967693498, 0.3058926692647145],
    },
    TableEntry {
        rate: 57,
        b: [0.0014099136547332317, 0.005639654618932927, 0.00845948192839939, 0.005639654618932927, 0.0014099136547332317],
        a: [1.0, -2.8520158471077885, 3.170553567437839, -1.608422655105332, 0.31244355325101375],
    },
    TableEntry {
        rate: 58,
        b: [0.0013256661048453142, 0.005302664419381257, 0.007953996629071884, 0.005302664419381257, 0.0013256661048453142],
        a: [1.0, -2.871676648770281, 3.209360588537728, -1.6353682155373506, 0.31889493344742853],
    },
    TableEntry {
        rate: 59,
        b: [0.0012476361548847382, 0.004990544619538953, 0.007485816929308429, 0.004990544619538953, 0.0012476361548847382],
        a: [1.0, -2.8906769727078077, 3.2471627339359435, -1.6617714348679207, 0.3252478521179407],
    },
    TableEntry {
        rate: 60,
        b: [0.0011752795495705098, 0.004701118198282039, 0.0070516772974230585, 0.004701118198282039, 0.0011752795495705098],
        a: [1.0, -2.9090494932527333, 3.2839960266686394, -1.687645499468677, 0.331503438845899],
    },
    TableEntry {
        rate: 61,
        b: [0.0011081069874286534, 0.0044324279497146134, 0.00664864192457192, 0.0044324279497146134, 0.0011081069874286534],
        a: [1.0, -2.926824766739666, 3.319894980128157, -1.7130033982841772, 0.3376628966945447],
    },
    TableEntry {
        rate: 62,
        b: [0.00104567784916011, 0.00418271139664044, 0.0062740670949606595, 0.00418271139664044, 0.00104567784916011],
        a: [1.0, -2.9440314003156973, 3.3548926569518214, -1.7378579010091009, 0.34372748995953856],
    },
    TableEntry {
        rate: 63,
        b: [0.000987594722589442, 0.003950378890357768, 0.005925568335536651, 0.003950378890357768, 0.000987594722589442],
        a: [1.0, -2.9606962048547487, 3.3890207277844784, -1.7622215407045074, 0.34969853333620876],
    },
    TableEntry {
        rate: 64,
        b: [0.0009334986129548442, 0.0037339944518193766, 0.005600991677729065, 0.0037339944518193766, 0.0009334986129548442],
        a: [1.0, -2.9768443336967323, 3.422309529377639, -1.7861066002180392, 0.3555773823444098],
    },
];

/// High-pass coefficients, 0.5 Hz cut-off
#[rustfmt::skip]
pub(crate) static HIGH_PASS_TABLE: [TableEntry; TABLE_LEN] = [
    TableEntry {
        rate: 9,
        b: [0.6320277513755174, -2.5281110055020695, 3.7921665082531044, -2.5281110055020695, 0.6320277513755174],
        a: [1.0, -3.0899906958456094, 3.661650221832192, -1.9613436525522194, 0.3994594517782578],
    },
    TableEntry {
        rate: 10,
        b: [0.6620158372026176, -2.6480633488104703, 3.9720950232157053, -2.6480633488104703, 0.6620158372026176],
        a: [1.0, -3.180638548874719, 3.8611943489942138, -2.112155355110969, 0.4382651422619799],
    },
    TableEntry {
        rate: 11,
        b: [0.6875289564702992, -2.750115825881197, 4.125173738821795, -2.750115825881197, 0.6875289564702992],
        a: [1.0, -3.2548849288561104, 4.029885967143687, -2.2429962552164406, 0.47269615230855067],
    },
    TableEntry {
        rate: 12,
        b: [0.7094894751253098, -2.837957900501239, 4.256936850751859, -2.837957900501239, 0.7094894751253098],
        a: [1.0, -3.3168079106244184, 4.174245550076574, -2.3574027805622584, 0.5033753607417042],
    },
    TableEntry {
        rate: 13,
        b: [0.728585250852849, -2.914341003411396, 4.371511505117094, -2.914341003411396, 0.728585250852849],
        a: [1.0, -3.369237996467506, 4.299112464491481, -2.4581770598456067, 0.5308364928409901],
    },
    TableEntry {
        rate: 14,
        b: [0.7453388351125974, -2.9813553404503894, 4.472033010675585, -2.9813553404503894, 0.7453388351125974],
        a: [1.0, -3.414201057126733, 4.408141684809092, -2.5475486263087905, 0.5555299935569432],
    },
    TableEntry {
        rate: 15,
        b: [0.7601538590971476, -3.0406154363885904, 4.560923154582886, -3.0406154363885904, 0.7601538590971476],
        a: [1.0, -3.45318513758661, 4.504139091633958, -2.627303618228232, 0.5778338981055606],
    },
    TableEntry {
        rate: 16,
        b: [0.7733467891606217, -3.093387156642487, 4.64008073496373, -3.093387156642487, 0.7733467891606217],
        a: [1.0, -3.4873077415499, 4.589291232078407, -2.6988843913407545, 0.5980652616008872],
    },
    TableEntry {
        rate: 17,
        b: [0.7851691050804265, -3.140676420321706, 4.711014630482559, -3.140676420321706, 0.7851691050804265],
        a: [1.0, -3.517424357325239, 4.665325430727639, -2.7634653663099407, 0.6164905269240066],
    },
    TableEntry {
        rate: 18,
        b: [0.7958230795738749, -3.1832923182954995, 4.774938477443249, -3.1832923182954995, 0.7958230795738749],
        a: [1.0, -3.544200965352301, 4.73362326456951, -2.8220106671038, 0.6333343761563845],
    },
    TableEntry {
        rate: 19,
        b: [0.8054731985488318, -3.2218927941953273, 4.832839191292991, -3.2218927941953273, 0.8054731985488318],
        a: [1.0, -3.568163738749145, 4.795302301165986, -2.875318061843708, 0.6487870750224707],
    },
    TableEntry {
        rate: 20,
        b: [0.8142545568862463, -3.257018227544985, 4.885527341317477, -3.257018227544985, 0.8142545568862463],
        a: [1.0, -3.5897338871121756, 4.851275882519416, -2.9240526561624582, 0.663010484385891],
    },
    TableEntry {
        rate: 21,
        b: [0.8222791200406763, -3.289116480162705, 4.933674720244058, -3.289116480162705, 0.8222791200406763],
        a: [1.0, -3.609252577502862, 4.902297478566531, -2.9687729126540003, 0.6761429519274297],
    },
    TableEntry {
        rate: 22,
        b: [0.8296404559374415, -3.318561823749766, 4.977842735624649, -3.318561823749766, 0.8296404559374415],
        a: [1.0, -3.6269990791549227, 4.948994030665414, -3.0099508985793726, 0.6883032865993542],
    },
    TableEntry {
        rate: 23,
        b: [0.8364173544772555, -3.345669417909022, 5.018504126863533, -3.345669417909022, 0.8364173544772555],
        a: [1.0, -3.643204187797929, 4.991891326868405, -3.0479881657637606, 0.6995939912059979],
    },
    TableEntry {
        rate: 24,
        b: [0.8426766272418682, -3.370706508967473, 5.056059763451209, -3.370706508967473, 0.8426766272418682],
        a: [1.0, -3.658060302401883, 5.031433533367606, -3.0832283017588153, 0.7101038983415866],
    },
    TableEntry {
        rate: 25,
        b: [0.848475295524359, -3.393901182097436, 5.090851773146154, -3.393901182097436, 0.848475295524359],
        a: [1.0, -3.6717290891619356, 5.067998386734191, -3.1159669252017466, 0.7199103272918715],
    },
    TableEntry {
        rate: 26,
        b: [0.8538623167176592, -3.415449266870637, 5.1231739003059555, -3.415449266870637, 0.8538623167176592],
        a: [1.0, -3.684347380703856, 5.101909126775776, -3.146459703961797, 0.7290808560411189],
    },
    TableEntry {
        rate: 27,
        b: [0.8588799585728305, -3.435519834291322, 5.153279751436983, -3.435519834291322, 0.8588799585728305],
        a: [1.0, -3.696031766992542, 5.133443954632238, -3.174928832204751, 0.7376747833357536],
    },
    TableEntry {
        rate: 28,
        b: [0.8635649021927516, -3.4542596087710065, 5.181389413156509, -3.4542596087710065, 0.8635649021927516],
        a: [1.0, -3.706882204316577, 5.162843592889622, -3.201568297504867, 0.7457443403729551],
    },
    TableEntry {
        rate: 29,
        b: [0.8679491341229953, -3.4717965364919814, 5.207694804737972, -3.4717965364919814, 0.8679491341229953],
        a: [1.0, -3.716984878890576, 5.190317376347171, -3.226548191249064, 0.7533356994811125],
    },
    TableEntry {
        rate: 30,
        b: [0.8720606730538601, -3.4882426922154406, 5.232364038323161, -3.4882426922154406, 0.8720606730538601],
        a: [1.0, -3.726414498672261, 5.21604819524609, -3.2500182574129832, 0.760489817530429],
    },
    TableEntry {
        rate: 31,
        b: [0.8759241657777074, -3.5036966631108295, 5.255544994666244, -3.5036966631108295, 0.8759241657777074],
        a: [1.0, -3.735236142280513, 5.240196534890876, -3.2721108310449836, 0.7672431442269443],
    },
    TableEntry {
        rate: 32,
        b: [0.8795613790064435, -3.518245516025774, 5.277368274038661, -3.518245516025774, 0.8795613790064435],
        a: [1.0, -3.7435067617389675, 5.262903798233322, -3.2929432846648394, 0.7736282194659634],
    },
    TableEntry {
        rate: 33,
        b: [0.8829916076507909, -3.5319664306031635, 5.297949645904746, -3.5319664306031635, 0.8829916076507909],
        a: [1.0, -3.7512764123623032, 5.284295055329406, -3.312620075518544, 0.7796741792024003],
    },
    TableEntry {
        rate: 34,
        b: [0.886232015639565, -3.54492806255826, 5.31739209383739, -3.54492806255826, 0.886232015639565],
        a: [1.0, -3.7585892658797233, 5.304481331561211, -3.331234467231143, 0.7854071855609606],
    },
    TableEntry {
        rate: 35,
        b: [0.8892979219196963, -3.557191687678785, 5.335787531518178, -3.557191687678785, 0.8892979219196963],
        a: [1.0, -3.7654844500884495, 5.323561522277487, -3.3488699844054275, 0.7908507939437772],
    },
    TableEntry {
        rate: 36,
        b: [0.8922030416444622, -3.5688121665778487, 5.353218249866773, -3.5688121665778487, 0.8922030416444622],
        a: [1.0, -3.7719967487235913, 5.341624003006988, -3.365601647050678, 0.796026267530142],
    },
    TableEntry {
        rate: 37,
        b: [0.8949596905248326, -3.5798387620993304, 5.369758143148996, -3.5798387620993304, 0.8949596905248326],
        a: [1.0, -3.778157187957345, 5.358747990170569, -3.381497022596611, 0.8009528476727966],
    },
    TableEntry {
        rate: 38,
        b: [0.8975789587386898, -3.590315834954759, 5.385473752432139, -3.590315834954759, 0.8975789587386898],
        a: [1.0, -3.7839935303871863, 5.375004696194748, -3.396617126059774, 0.8056479871773302],
    },
    TableEntry {
        rate: 39,
        b: [0.9000708595559077, -3.600283438223631, 5.400425157335446, -3.600283438223631, 0.9000708595559077],
        a: [1.0, -3.789530693099203, 5.390458314330221, -3.411017193237754, 0.8101275522273453],
    },
    TableEntry {
        rate: 40,
        b: [0.9024444568629442, -3.6097778274517767, 5.414666741177665, -3.6097778274517767, 0.9024444568629442],
        a: [1.0, -3.794791103079408, 5.405166861726172, -3.4247473472742453, 0.8144059977272788],
    },
    TableEntry {
        rate: 41,
        b: [0.9047079749984007, -3.618831899993603, 5.428247849990404, -3.618831899993603, 0.9047079749984007],
        a: [1.0, -3.7997950006589907, 5.419182903975715, -3.437853175310186, 0.8184965200295211],
    },
    TableEntry {
        rate: 42,
        b: [0.9068688936953878, -3.6274755747815512, 5.441213362172327, -3.6274755747815512, 0.9068688936953878],
        a: [1.0, -3.804560699646267, 5.432554180107061, -3.450376229017418, 0.8224111903554563],
    },
    TableEntry {
        rate: 43,
        b: [0.9089340304330119, -3.6357361217320476, 5.453604182598071, -3.6357361217320476, 0.9089340304330119],
        a: [1.0, -3.8091048111898878, 5.44532414360496, -3.4623544604515155, 0.8261610716818287],
    },
    TableEntry {
        rate: 44,
        b: [0.9109096121016459, -3.6436384484065836, 5.465457672609875, -3.6436384484065836, 0.9109096121016459],
        a: [1.0, -3.81344243713833, 5.45753243232288, -3.473822602743761, 0.829756321421368],
    },
    TableEntry {
        rate: 45,
        b: [0.9128013375645191, -3.6512053502580764, 5.476808025387115, -3.6512053502580764, 0.9128013375645191],
        a: [1.0, -3.817587337636752, 5.469215277945819, -3.4848125035883104, 0.8332062818614168],
    },
    TableEntry {
        rate: 46,
        b: [0.9146144324360493, -3.6584577297441974, 5.487686594616296, -3.6584577297441974, 0.9146144324360493],
        a: [1.0, -3.8215520768784916, 5.48040586387736, -3.4953534181990706, 0.8365195600218682],
    },
    TableEntry {
        rate: 47,
        b: [0.9163536971830448, -3.6654147887321793, 5.498122183098269, -3.6654147887321793, 0.9163536971830448],
        a: [1.0, -3.8253481502623052, 5.491134638967841, -3.5054722673562226, 0.8397040983423463],
    },
    TableEntry {
        rate: 48,
        b: [0.9180235494788952, -3.672094197915581, 5.508141296873371, -3.672094197915581, 0.9180235494788952],
        a: [1.0, -3.828986095665021, 5.501429593307183, -3.5151938652911725, 0.8427672373989405],
    },
    TableEntry {
        rate: 49,
        b: [0.919628061595806, -3.678512246383224, 5.517768369574836, -3.678512246383224, 0.919628061595806],
        a: [1.0, -3.832475591097268, 5.511316501324092, -3.5245411214361275, 0.8457157716754051],
    },
    TableEntry {
        rate: 50,
        b: [0.9211709934999417, -3.6846839739997668, 5.52702596099965, -3.6846839739997668, 0.9211709934999417],
        a: [1.0, -3.835825540647348, 5.520819136622228, -3.5335352194630145, 0.848555999266477],
    },
    TableEntry {
        rate: 51,
        b: [0.9226558222145123, -3.690623288858049, 5.5359349332870735, -3.690623288858049, 0.9226558222145123],
        a: [1.0, -3.839044150319735, 5.5299594623113535, -3.5421957765340797, 0.8512937662670287],
    },
    TableEntry {
        rate: 52,
        b: [0.9240857679325264, -3.6963430717301056, 5.544514607595159, -3.6963430717301056, 0.9240857679325264],
        a: [1.0, -3.8421389951276987, 5.538757800031419, -3.5505409852652643, 0.8539345064960406],
    },
    TableEntry {
        rate: 53,
        b: [0.92546381729119, -3.70185526916476, 5.55278290374714, -3.70185526916476, 0.92546381729119],
        a: [1.0, -3.8451170785944786, 5.547232980399623, -3.5585877405492434, 0.8564832771156919],
    },
    TableEntry {
        rate: 54,
        b: [0.9267927441613325, -3.70717097664533, 5.560756464967995, -3.70717097664533, 0.9267927441613325],
        a: [1.0, -3.847984885646511, 5.555402477218166, -3.5663517530861135, 0.858944790630535],
    },
    TableEntry {
        rate: 55,
        b: [0.9280751282558783, -3.7123005130235134, 5.56845076953527, -3.7123005130235134, 0.9280751282558783],
        a: [1.0, -3.850748429739271, 5.563282527450414, -3.573847651216818, 0.8613234436875467],
    },
    TableEntry {
        rate: 56,
        b: [0.9293133718195852, -3.7172534872783407, 5.575880230917511, -3.7172534872783407, 0.9293133718195852],
        a: [1.0, -3.8534132949362534, 5.570888238694511, -3.5810890724395796, 0.8636233430430181],
    },
    TableEntry {
        rate: 57,
        b: [0.9305097146269101, -3.7220388585076405, 5.58305828776146, -3.7220388585076405, 0.9305097146269101],
        a: [1.0, -3.8559846735605756, 5.578233685647719, -3.5880887458069277, 0.8658483290153427],
    },
    TableEntry {
        rate: 58,
        b: [0.9316662474846781, -3.7266649899387123, 5.589997484908069, -3.7266649899387123, 0.9316662474846781],
        a: [1.0, -3.8584673999532626, 5.585331996854393, -3.5948585662447594, 0.8680019967024328],
    },
    TableEntry {
        rate: 59,
        b: [0.932784924410575, -3.7311396976423, 5.59670954646345, -3.7311396976423, 0.932784924410575],
        a: [1.0, -3.860865980799926, 5.592195432860003, -3.601409661701405, 0.8700877152078618],
    },
    TableEntry {
        rate: 60,
        b: [0.9338675736364779, -3.7354702945459115, 5.603205441818867, -3.7354702945459115, 0.9338675736364779],
        a: [1.0, -3.8631846224259982, 5.598835456747834, -3.6077524539199373, 0.872108645089875],
    },
    TableEntry {
        rate: 61,
        b: [0.9349159075667839, -3.7396636302671356, 5.609495445400704, -3.7396636302671356, 0.9349159075667839],
        a: [1.0, -3.865427255408232, 5.605262797910294, -3.613896713528424, 0.8740677542215924],
    },
    TableEntry {
        rate: 62,
        b: [0.935931531805682, -3.743726127222728, 5.615589190834092, -3.743726127222728, 0.935931531805682],
        a: [1.0, -3.8675975568053413, 5.611487509799604, -3.6198516100576867, 0.8759678322282792],
    },
    TableEntry {
        rate: 63,
        b: [0.9369159533533489, -3.7476638134133955, 5.621495720120093, -3.7476638134133955, 0.9369159533533489],
        a: [1.0, -3.8696989702722213, 5.617519022310491, -3.6256257574227275, 0.8778115036481463],
    },
    TableEntry {
        rate: 64,
        b: [0.9378705880589461, -3.7514823522357843, 5.627223528353676, -3.7514823522357843, 0.9378705880589461],
        a: [1.0, -3.871734724289116, 5.623366189367804, -3.631227255340071, 0.8796012399461498],
    },
];
