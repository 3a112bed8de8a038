//! Natural cubic spline through `(I1(κ)/I0(κ), ln κ)` for the von Mises concentration.
//!
//! Generated by `mixtape-spline-table` with 1024 log-spaced knots over κ ∈ [1e-5, 700].
//! Regenerate with `cargo run --bin mixtape-spline-table > src/inv_bessel_table.rs`.

/// Number of knots in each table.
pub const INV_BESSEL_KNOTS: usize = 1024;

/// Lower end of the fitted concentration range.
pub const INV_BESSEL_KAPPA_MIN: f64 = 1e-5;

/// Upper end of the fitted concentration range.
pub const INV_BESSEL_KAPPA_MAX: f64 = 700.0;

/// Knot abscissae: the Bessel ratio A(κ) = I1(κ)/I0(κ), strictly increasing.
pub static INV_BESSEL_X: [f64; INV_BESSEL_KNOTS] = [
    4.999999999937501e-06, 5.089073483129619e-06, 5.17973378340327e-06,
    5.2720091694233735e-06, 5.365928413452543e-06, 5.461520800322524e-06,
    5.558816136565444e-06, 5.657844759707782e-06, 5.758637547729807e-06,
    5.861225928693674e-06, 5.965641890542917e-06, 6.071917991076586e-06,
    6.180087368101035e-06, 6.290183749762595e-06, 6.402241465064287e-06,
    6.516295454569893e-06, 6.632381281298768e-06, 6.750535141814636e-06,
    6.8707938775120535e-06, 6.99319498610382e-06, 7.117776633313103e-06,
    7.244577664773882e-06, 7.373637618143302e-06, 7.504996735429875e-06,
    7.638695975541286e-06, 7.774777027055748e-06, 7.913282321220816e-06,
    8.054255045183887e-06, 8.19773915545825e-06, 8.343779391629165e-06,
    8.492421290304015e-06, 8.643711199311062e-06, 8.797696292151e-06,
    8.954424582706186e-06, 9.113944940211694e-06, 9.276307104493209e-06,
    9.441561701476323e-06, 9.609760258972099e-06, 9.78095522274398e-06,
    9.955199972860696e-06, 1.013254884034078e-05, 1.0313057124093324e-05,
    1.0496781108160734e-05, 1.0683778079268547e-05, 1.0874106344687913e-05,
    1.106782525041636e-05, 1.1264995199682343e-05, 1.14656776717795e-05,
    1.1669935241236417e-05, 1.1877831597327958e-05, 1.2089431563934065e-05,
    1.230480111975243e-05, 1.2524007418871252e-05, 1.2747118811708391e-05,
    1.2974204866323692e-05, 1.320533639011087e-05, 1.3440585451875932e-05,
    1.3680025404308632e-05, 1.3923730906854785e-05, 1.4171777948995535e-05,
    1.4424243873941569e-05, 1.468120740274939e-05, 1.4942748658867248e-05,
    1.520894919311832e-05, 1.54798920091289e-05, 1.575566158920975e-05,
    1.6036343920698368e-05, 1.6322026522770522e-05, 1.6612798473729558e-05,
    1.6908750438781728e-05, 1.7209974698306496e-05, 1.7516565176630244e-05,
    1.7828617471312673e-05, 1.814622888295506e-05, 1.846949844553936e-05,
    1.879852695730778e-05, 1.913341701219271e-05, 1.9474273031806237e-05,
    1.9821201297999854e-05, 2.017430998600387e-05, 2.053370919815756e-05,
    2.0899510998239976e-05, 2.1271829446412243e-05, 2.1650780634782745e-05,
    2.2036482723605528e-05, 2.2429055978123654e-05, 2.2828622806068988e-05,
    2.3235307795829995e-05, 2.3649237755299433e-05, 2.4070541751414174e-05,
    2.4499351150399384e-05, 2.493579965872967e-05, 2.5380023364819757e-05,
    2.5832160781458323e-05, 2.6292352888997238e-05, 2.676074317931047e-05,
    2.7237477700536256e-05, 2.772270510261602e-05, 2.821657668364469e-05,
    2.8719246437046863e-05, 2.92308710995932e-05, 2.9751610200272286e-05,
    3.028162611003325e-05, 3.0821084092414295e-05, 3.137015235507335e-05,
    3.192900210223677e-05, 3.249780758808196e-05, 3.307674617107175e-05,
    3.366599836925604e-05, 3.426574791655888e-05, 3.4876181820068356e-05,
    3.549749041834706e-05, 3.612986744078115e-05, 3.677351006798691e-05,
    3.742861899329343e-05, 3.809539848532033e-05, 3.8774056451670824e-05,
    3.946480450375842e-05, 4.0167858022789954e-05, 4.088343622692297e-05,
    4.1611762239619654e-05, 4.2353063159218936e-05, 4.31075701297474e-05,
    4.3875518412992346e-05, 4.465714746185808e-05, 4.545270099502963e-05,
    4.626242707296616e-05, 4.708657817524841e-05, 4.792541127930415e-05,
    4.87791879405356e-05, 4.964817437387482e-05, 5.0532641536791996e-05,
    5.143286521378196e-05, 5.234912610235641e-05, 5.328170990056774e-05,
    5.423090739609189e-05, 5.5197014556898906e-05, 5.618033262353782e-05,
    5.718116820306633e-05, 5.8199833364653364e-05, 5.923664573688477e-05,
    6.029192860680289e-05, 6.136601102071031e-05, 6.245922788676864e-05,
    6.357192007942665e-05, 6.470443454570704e-05, 6.585712441338793e-05,
    6.70303491011109e-05, 6.822447443045082e-05, 6.94398727399824e-05,
    7.067692300137791e-05, 7.193601093757434e-05, 7.321752914304465e-05,
    7.45218772062124e-05, 7.584946183404675e-05, 7.720069697887677e-05,
    7.857600396746575e-05, 7.997581163238419e-05, 8.140055644572339e-05,
    8.285068265519131e-05, 8.432664242263253e-05, 8.582889596501626e-05,
    8.735791169793577e-05, 8.891416638166452e-05, 9.049814526981363e-05,
    9.211034226063822e-05, 9.37512600510392e-05, 9.542141029330825e-05,
    9.712131375466492e-05, 9.885150047963674e-05, 0.0001006125099553312,
    0.00010240489127965248, 0.00010422920333251454, 0.00010608601495010459,
    0.00010797590510225119, 0.00010989946307295113, 0.00011185728864411426,
    0.00011384999228257885, 0.00011587819533046138, 0.00011794253019889595,
    0.0001200436405652247, 0.00012218218157370196, 0.000124358820039774,
    0.00012657423465799682, 0.0001288291162136592, 0.00013112416779817462,
    0.00013346010502831142, 0.00013583765626932733, 0.0001382575628620803,
    0.0001407205793541836, 0.0001432274737352807, 0.00014577902767651021,
    0.00014837603677423684, 0.00015101931079812523, 0.00015370967394363227,
    0.00015644796508899794, 0.00015923503805681356, 0.000162071761880251,
    0.0001649590210740336, 0.00016789771591023528, 0.0001708887626989917,
    0.0001739330940742128, 0.00017703165928438568, 0.00018018542448855793,
    0.00018339537305759153, 0.00018666250588078782, 0.00018998784167797007,
    0.00019337241731712964, 0.0001968172881377283, 0.00020032352827976057,
    0.00020389223101867953, 0.00020752450910628718, 0.0002112214951176991,
    0.00021498434180448856, 0.00021881422245412428, 0.0002227123312558089,
    0.00022667988367283505, 0.00023071811682157665, 0.0002348282898572289,
    0.00023901168436642352, 0.0002432696047668338, 0.00024760337871390225,
    0.0002520143575148124, 0.00025650391654983515, 0.00026107345570118177,
    0.00026572439978949405, 0.0002704581990181159, 0.0002752763294252733,
    0.00028018029334431384, 0.0002851716198721414, 0.0002902518653459997,
    0.0002954226138287473, 0.00030068547760277685, 0.0003060420976727346,
    0.00031149414427719446, 0.00031704331740944815, 0.0003226913473475718,
    0.0003284399951939366, 0.0003342910534243287, 0.00034024634644685313,
    0.0003463077311707932, 0.000352477097585602, 0.0003587563693502134,
    0.0003651475043928437, 0.0003716524955214856, 0.0003782733710452715,
    0.0003850121954069106, 0.00039187106982638856, 0.000398852132956137,
    0.00040595756154787247, 0.00041318957113131396, 0.00042055041670499387,
    0.0004280423934393731, 0.00043566783739247897, 0.00044342912623829815,
    0.00045132868000813837, 0.00045936896184519885, 0.00046755247877258645,
    0.0004758817824750055, 0.00048435947009437837, 0.0004929881850396392,
    0.0005017706178109472, 0.0005107095068385897, 0.0005198076393368235,
    0.0005290678521729287, 0.000538493032751745, 0.0005480861199159593,
    0.0005578501048624356, 0.0005677880320748681, 0.0005779030002730422,
    0.0005881981633790145, 0.0005986767315004918, 0.0006093419719317389,
    0.000620197210172307, 0.0006312458309639137, 0.0006424912793457922,
    0.000653937061728837, 0.0006655867469888884, 0.0006774439675794854,
    0.0006895124206644417, 0.0007017958692706012, 0.0007142981434611212,
    0.000727023141529655, 0.0007399748312158109, 0.0007531572509422562,
    0.0007665745110738573, 0.0007802307951992554, 0.000794130361435258,
    0.0008082775437544753, 0.0008226767533365966, 0.0008373324799437425,
    0.0008522492933203055, 0.0008674318446177353, 0.0008828848678446914,
    0.0008986131813430357, 0.0009146216892901024, 0.0009309153832277372,
    0.0009474993436185613, 0.0009643787414299558, 0.0009815588397462708,
    0.0009990449954097253, 0.0010168426606905546, 0.001034957384986893,
    0.0010533948165549303, 0.0010721607042698926, 0.0010912608994183793,
    0.0011107013575226172, 0.0011304881401972128, 0.0011506274170389695,
    0.001171125467550355, 0.0011919886830972367, 0.0012132235689014698,
    0.0012348367460689727, 0.0012568349536539324, 0.0012792250507597512,
    0.001302014018677414, 0.0013252089630619449, 0.0013488171161476108,
    0.0013728458390025698, 0.0013973026238236759, 0.0014221950962721398,
    0.001447531017850791, 0.0014733182883236522, 0.001499564948178611,
    0.0015262791811339372, 0.0015534693166894258, 0.0015811438327229595,
    0.0016093113581333194, 0.0016379806755300204, 0.001667160723971063,
    0.0016968606017494167, 0.001727089569229095, 0.0017578570517317524,
    0.001789172642474638, 0.00182104610556086, 0.001853487379022896,
    0.0018865065779202553, 0.0019201139974922982, 0.001954320116367156,
    0.001989135599827801, 0.002024571303136197, 0.0020606382749166637,
    0.002097347760599427, 0.00213471120592546, 0.002172740260513695,
    0.002211446781491726, 0.0022508428371910954, 0.002290940710908368,
    0.002331752904733095, 0.002373292143443912, 0.002415571378473939,
    0.002458603791946731, 0.002502402800784032, 0.002546982060886613,
    0.00259235547138946, 0.0026385371789926565, 0.0026855415823693086,
    0.002733383336651852, 0.0027820773579981424, 0.002831638828238771,
    0.002882083199606984, 0.002933426199552734, 0.0029856838356422896,
    0.0030388724005450023, 0.003093008477108668, 0.003148108943525136,
    0.0032041909785877473, 0.0032612720670421773, 0.0033193700050323923,
    0.0033785029056433756, 0.0034386892045423336, 0.0034999476657201333,
    0.0035622973873347345, 0.0036257578076584066, 0.003690348711130596,
    0.003756090234518256, 0.003823002873185604, 0.00389110748747517,
    0.00396042530920214, 0.004030977948263986, 0.004102787399367386,
    0.00417587604887453, 0.0042502666817709105, 0.004325982488756725,
    0.004403047073464072, 0.004481484459802128, 0.004561319099432607,
    0.004642575879377731, 0.0047252801297630745, 0.004809457631697649,
    0.004895134625293609, 0.004982337817828068, 0.00507109439204944,
    0.005161432014630944, 0.005253378844773747, 0.005346963542962383,
    0.005442215279875207, 0.005539163745452388, 0.005637839158124429,
    0.005738272274203808, 0.005840494397442699, 0.0059445373887596215,
    0.006050433676137972, 0.006158216264699413, 0.006267918746955126,
    0.0063795753132381075, 0.006493220762319491, 0.006608890512212221,
    0.006726620611165281, 0.006846447748851675, 0.006968409267753656,
    0.007092543174748424, 0.007218888152897948, 0.007347483573446169,
    0.007478369508027455, 0.007611586741089554, 0.007747176782535062,
    0.00788518188058492, 0.008025645034867815, 0.008168610009739273,
    0.00831412134783445, 0.008462224383858465, 0.008612965258618398,
    0.008766390933300932, 0.008922549203999946, 0.009081488716498047,
    0.00924325898130652, 0.009407910388967912, 0.00957549422562562,
    0.009746062688865064, 0.009919668903830798, 0.010096366939624239,
    0.010276211825986717, 0.01045925957027243, 0.010645567174716068,
    0.010835192654000089, 0.011028195053126454, 0.011224634465597653,
    0.0114245720519124, 0.011628070058380688, 0.011835191836263588,
    0.012046001861242975, 0.012260565753226435, 0.012478950296492602,
    0.01270122346018257, 0.012927454419142514, 0.013157713575123351,
    0.013392072578342693, 0.013630604349415142, 0.013873383101656043,
    0.014120484363765142, 0.014371985002895202, 0.014627963248112101,
    0.014888498714251765, 0.015153672426180197, 0.015423566843462508,
    0.015698265885446868, 0.015977854956769712, 0.016262420973287943,
    0.016552052388444566, 0.01684683922007381, 0.01714687307765179,
    0.01745224718999923, 0.01776305643344223, 0.018079397360437417,
    0.018401368228667603, 0.018729069030614425, 0.01906260152361409,
    0.019402069260402287, 0.019747577620154954, 0.02009923384003062,
    0.02045714704722061, 0.02082142829151349, 0.021192190578379535,
    0.02156954890258129, 0.02195362028231634, 0.022344523793898046,
    0.022742380606979834, 0.023147314020329175, 0.023559449498156373,
    0.02397891470700377, 0.024405839553200886, 0.02484035622089014,
    0.02528259921062857, 0.025732705378569993, 0.026190813976232505,
    0.026657066690855144, 0.02713160768634853, 0.027614583644842376,
    0.02810614380883429, 0.028606440023942376, 0.029115626782264804,
    0.02963386126634872, 0.030161303393770735, 0.03069811586233042,
    0.031244464195857816, 0.03180051679063638, 0.032366444962440385,
    0.03294242299418737, 0.03352862818420395, 0.03412524089510358,
    0.03473244460327345, 0.03535042594896788, 0.03597937478700411,
    0.03661948423805471, 0.03727095074053299, 0.03793397410306209,
    0.038608757557521974, 0.039295507812664596, 0.03999443510828757,
    0.040705753269954355, 0.0414296797642498, 0.04216643575455531,
    0.04291624615732968, 0.04367933969887747, 0.04445594897258683,
    0.045246310496616114, 0.046050664772006554, 0.04686925634119751,
    0.047702333846916786, 0.04855015009141784, 0.049412962096033304,
    0.05029103116101016, 0.05118462292559134, 0.0520940074283049,
    0.05301945916741771, 0.05396125716151045, 0.054919685010123745,
    0.05589503095442572, 0.05688758793784395, 0.05789765366660379,
    0.058925530670109305, 0.05997152636109928, 0.06103595309550739,
    0.0621191282319481, 0.06322137419074822, 0.06434301851243655,
    0.06548439391559922, 0.06664583835400277, 0.06782769507288063,
    0.06903031266427244, 0.07025404512129879, 0.07149925189124713,
    0.07276629792733648, 0.07405555373902216, 0.07536739544069293,
    0.07670220479860314, 0.07806036927587562, 0.07944228207540098,
    0.0808483421804483, 0.0822789543927923, 0.08373452936815345,
    0.0852154836487315, 0.08672223969260638, 0.0882552258997653,
    0.08981487663450217, 0.09140163224392153, 0.09301593907227018,
    0.0946582494707956, 0.0963290218028251, 0.09802872044373805,
    0.09975781577548809, 0.10151678417531675, 0.10330610799828044,
    0.10512627555319597, 0.10697778107158869, 0.1088611246692101,
    0.11077681229966979, 0.11272535569970404, 0.11470727232558732,
    0.11672308528016148, 0.11877332322994229, 0.1208585203117361,
    0.12297921602817131, 0.12513595513153236, 0.12732928749524877,
    0.12955976797237187, 0.1318279562403429, 0.13413441663132705,
    0.13647971794736224, 0.13886443325954134, 0.14128913969041781,
    0.14375441817880025, 0.14626085322605947, 0.14880903262305914,
    0.1513995471567785, 0.15403299029567186, 0.15670995785277972,
    0.15943104762557708, 0.16219685901151756, 0.16500799259820326,
    0.16786504972708505, 0.17076863202957185, 0.17371934093440317,
    0.17671777714512368, 0.17976454008646403, 0.18286022731843193,
    0.18600543391689048, 0.1892007518193922, 0.19244676913503145,
    0.19574406941706973, 0.19909323089708958, 0.2024948256794391,
    0.2059494188947359, 0.2094575678112201, 0.21301982090276297,
    0.21663671687237646, 0.2203087836300955, 0.22403653722416347,
    0.22782048072449781, 0.2316611030574871, 0.2355588777912414,
    0.2395142618705136, 0.24352769430060459, 0.2475995947796898,
    0.2517303622791257, 0.2559203735714493, 0.26016998170593963,
    0.26447951443179946, 0.26884927256919977, 0.2732795283286642,
    0.2777705235794965, 0.2823224680682213, 0.2869355375882848,
    0.2916098721025698, 0.2963455738206088, 0.3011427052327219,
    0.3060012871036984, 0.3109212964290235, 0.31590266435709213,
    0.32094527408129864, 0.3260489587063584, 0.33121349909373143,
    0.3364386216915273, 0.34172399635482315, 0.3470692341628905,
    0.35247388524040724, 0.35793743659033556, 0.36345930994676073,
    0.3690388596566083, 0.3746753705997917, 0.3803680561579797,
    0.38611605624279416, 0.39191843539490123, 0.39777418096603795,
    0.40368220139663813, 0.4096413246022754, 0.41565029648267937,
    0.42170777956756766, 0.4278123518139814, 0.4339625055701907,
    0.44015664672154176, 0.4463930940338572, 0.45267007871013026,
    0.45898574417629734, 0.4653381461118092, 0.47172525274050525,
    0.47814494539699454, 0.4845950193832578, 0.4910731851295727,
    0.49757706967308374, 0.5041042184663839, 0.510652097527352,
    0.5172180959401865, 0.5237995287160857, 0.5303936400203496,
    0.5369976067708218, 0.5436085426105529, 0.5502235022553338,
    0.5568394862143815, 0.5634534458798991, 0.5700622889785496,
    0.5766628853750704, 0.583252073215324, 0.5898266653930849,
    0.5963834563217885, 0.6029192289893872, 0.6094307622713624,
    0.6159148384738896, 0.6223682510761995, 0.6287878126382771,
    0.6351703628373717, 0.6415127765942433, 0.6478119722477993,
    0.6540649197347527, 0.6602686487292341, 0.6664202566959241,
    0.6725169168092983, 0.6785558856910016, 0.6845345109172306,
    0.6904502382483267, 0.6963006185335798, 0.702083314245484,
    0.7077961055994894, 0.7134368962174793, 0.7190037182959494,
    0.7244947372429906, 0.7299082557517765, 0.7352427172822285,
    0.7404967089268617, 0.7456689636414646, 0.7507583618261628,
    0.7557639322475318, 0.7606848522976821, 0.7655204475915742,
    0.7702701909091848, 0.7749337004944605, 0.7795107377282002,
    0.7840012041970206, 0.7884051381853703, 0.7927227106220328,
    0.796954220516701, 0.8011000899259582, 0.8051608584912834,
    0.8091371775945174, 0.8130298041785334, 0.8168395942826285,
    0.8205674963433671, 0.8242145443123, 0.8277818506420802,
    0.8312705991921067, 0.8346820381038571, 0.8380174726946593,
    0.8412782584167172, 0.8444657939258868, 0.8475815143019648,
    0.8506268844591782, 0.853603392782207, 0.8565125450194668,
    0.8593558584615824, 0.8621348564290787, 0.8648510630892969,
    0.8675059986185416, 0.8701011747214561, 0.8726380905157259,
    0.8751182287864041, 0.8775430526105401, 0.8799140023493643,
    0.8822324930021166, 0.8844999119126575, 0.8867176168174153,
    0.8888869342208553, 0.8910091580826893, 0.893085548799325,
    0.895117332460734, 0.8971057003628412, 0.8990518087548479,
    0.9009567788004478, 0.9028216967317655, 0.9046476141749705,
    0.906435548626863, 0.9081864840623274, 0.9099013716532928,
    0.9115811305807767, 0.9132266489226569, 0.9148387846009698,
    0.9164183663737798, 0.9179661948579906, 0.919483043570754,
    0.920969659978505, 0.9224267665439514, 0.923855061762628,
    0.9252552211818738, 0.9266278983962566, 0.92797372601457,
    0.9292933165945412, 0.9305872635423276, 0.9318561419747072,
    0.933100509542622, 0.9343209072153974, 0.9355178600254902,
    0.9366918777741404, 0.9378434556986772, 0.938973075102539,
    0.9400812039493454, 0.9411682974225306, 0.9422347984521859,
    0.9432811382108481, 0.9443077365800079, 0.9453150025891232,
    0.9463033348289024, 0.9472731218405849, 0.9482247424828655,
    0.9491585662780582, 0.9500749537389952, 0.9509742566780696,
    0.9518568184997407, 0.9527229744777234, 0.9535730520179931,
    0.9544073709086502, 0.9552262435575931, 0.9560299752188878,
    0.9568188642086212, 0.95759320211098, 0.9583532739752127,
    0.9590993585040917, 0.9598317282344192, 0.9605506497100939,
    0.961256383648189, 0.9619491850984729, 0.9626293035967566,
    0.9632969833124162, 0.9639524631904298, 0.9645959770882159,
    0.9652277539075576, 0.9658480177218682, 0.9664569878990332,
    0.9670548792200498, 0.9676419019936697, 0.9682182621672374,
    0.9687841614338966, 0.9693397973363396, 0.9698853633672471,
    0.9704210490665724, 0.970947040115802, 0.9714635184293243,
    0.9719706622430283, 0.9724686462002463, 0.9729576414351482,
    0.9734378156536924, 0.9739093332122266, 0.9743723551938333,
    0.9748270394825043, 0.9752735408352279, 0.97571201095207,
    0.9761425985443131, 0.9765654494007383, 0.9769807064521053,
    0.977388509833902, 0.9777889969474189, 0.9781823025192135,
    0.9785685586590099, 0.9789478949160995, 0.979320438334281,
    0.9796863135053959, 0.9800456426215031, 0.980398545525737,
    0.9807451397618914, 0.9810855406227695, 0.9814198611973397,
    0.9817482124167338, 0.9820707030991244, 0.9823874399935137,
    0.982698527822469, 0.9830040693238357, 0.9833041652914563,
    0.9835989146149319, 0.9838884143184402, 0.9841727595986556,
    0.9844520438617798, 0.9847263587597219, 0.9849957942254429,
    0.9852604385074938, 0.9855203782037644, 0.985775698294471,
    0.9860264821743999, 0.9862728116844248, 0.9865147671423244,
    0.9867524273729118, 0.9869858697374987, 0.9872151701627122,
    0.9874404031686757, 0.9876616418965776, 0.9878789581356389,
    0.988092422349497, 0.9883021037020208, 0.9885080700825695,
    0.9887103881307121, 0.9889091232604195, 0.9891043396837413,
    0.9892961004339833, 0.9894844673883938, 0.989669501290375,
    0.989851261771226, 0.9900298073714369, 0.9902051955615333,
    0.990377482762493, 0.9905467243657388, 0.990712974752718,
    0.9908762873140823, 0.9910367144684709, 0.9911943076809122,
    0.9913491174808502, 0.9915011934798044, 0.9916505843886697,
    0.9917973380346712, 0.9919415013779732, 0.9920831205279548,
    0.9922222407591622, 0.9923589065269367, 0.9924931614827364,
    0.9926250484891478, 0.992754609634604, 0.9928818862478066,
    0.9930069189118654, 0.9931297474781602, 0.9932504110799245,
    0.9933689481455696, 0.9934853964117414, 0.993599792936125,
    0.9937121741099983, 0.9938225756705429, 0.9939310327129107,
    0.9940375797020627, 0.9941422504843741, 0.9942450782990165,
    0.9943460957891204, 0.9944453350127214, 0.9945428274534989,
    0.994638604031305, 0.9947326951124934, 0.9948251305200513,
    0.9949159395435364, 0.9950051509488247, 0.9950927929876731,
    0.9951788934070985, 0.9952634794585825, 0.9953465779070969,
    0.9954282150399625, 0.9955084166755367, 0.9955872081717403,
    0.9956646144344211, 0.9957406599255617, 0.9958153686713318,
    0.9958887642699903, 0.9959608698996378, 0.9960317083258257,
    0.9961013019090209, 0.9961696726119331, 0.9962368420067027,
    0.9963028312819574, 0.9963676612497369, 0.9964313523522857,
    0.9964939246687246, 0.9965553979215931, 0.9966157914832758,
    0.9966751243823064, 0.9967334153095536, 0.9967906826242984,
    0.9968469443601929, 0.9969022182311122, 0.9969565216368992,
    0.9970098716690016, 0.9970622851160049, 0.9971137784690679,
    0.9971643679272519, 0.9972140694027576, 0.9972628985260624,
    0.9973108706509662, 0.9973580008595431, 0.9974043039670025,
    0.9974497945264632, 0.997494486833638, 0.9975383949314331,
    0.997581532614467, 0.9976239134335014, 0.9976655506997959,
    0.9977064574893825, 0.9977466466472594, 0.9977861307915147,
    0.9978249223173681, 0.9978630334011444, 0.9979004760041733,
    0.9979372618766178, 0.9979734025612335, 0.9980089093970622,
    0.9980437935230542, 0.9980780658816291, 0.9981117372221704,
    0.998144818104458, 0.9981773189020361, 0.9982092498055247,
    0.9982406208258682, 0.998271441797525, 0.9983017223816032,
    0.9983314720689351, 0.9983607001831011, 0.9983894158833955,
    0.9984176281677409, 0.99844534587555, 0.998472577690535,
    0.9984993321434683, 0.9985256176148919, 0.9985514423377798,
    0.998576814400151, 0.9986017417476375, 0.9986262321860042,
    0.998650293383626, 0.9986739328739185, 0.9986971580577263,
    0.998719976205669, 0.9987423944604441, 0.9987644198390886,
    0.9987860592352031, 0.9988073194211308, 0.9988282070501036,
    0.9988487286583456, 0.998868890667141, 0.9988886993848642,
    0.9989081610089752, 0.9989272816279773, 0.9989460672233411,
    0.9989645236713954, 0.9989826567451816, 0.9990004721162778,
    0.9990179753565892, 0.9990351719401057, 0.999052067244631,
    0.9990686665534781, 0.9990849750571364, 0.9991009978549078,
    0.999116739956516, 0.9991322062836846, 0.9991474016716885,
    0.9991623308708779, 0.9991769985481753, 0.9991914092885447,
    0.9992055675964362, 0.9992194778972049, 0.9992331445385029,
    0.9992465717916492, 0.9992597638529733, 0.9992727248451362,
    0.9992854588184262,
];

/// Knot ordinates: ln κ.
pub static INV_BESSEL_LOG_KAPPA: [f64; INV_BESSEL_KNOTS] = [
    -11.512925464970229, -11.495267590287908, -11.477609715605588,
    -11.459951840923269, -11.442293966240948, -11.424636091558629,
    -11.406978216876308, -11.389320342193987, -11.371662467511666,
    -11.354004592829346, -11.336346718147025, -11.318688843464706,
    -11.301030968782385, -11.283373094100066, -11.265715219417745,
    -11.248057344735425, -11.230399470053104, -11.212741595370785,
    -11.195083720688464, -11.177425846006143, -11.159767971323822,
    -11.142110096641503, -11.124452221959181, -11.106794347276862,
    -11.089136472594541, -11.071478597912222, -11.053820723229903,
    -11.036162848547582, -11.018504973865262, -11.000847099182941,
    -10.983189224500622, -10.9655313498183, -10.94787347513598,
    -10.930215600453659, -10.91255772577134, -10.894899851089018,
    -10.8772419764067, -10.859584101724378, -10.841926227042059,
    -10.824268352359738, -10.806610477677419, -10.788952602995098,
    -10.771294728312778, -10.753636853630455, -10.735978978948136,
    -10.718321104265815, -10.700663229583496, -10.683005354901175,
    -10.665347480218855, -10.647689605536536, -10.630031730854215,
    -10.612373856171896, -10.594715981489575, -10.577058106807256,
    -10.559400232124935, -10.541742357442615, -10.524084482760292,
    -10.506426608077973, -10.488768733395652, -10.471110858713333,
    -10.453452984031012, -10.435795109348692, -10.418137234666371,
    -10.400479359984052, -10.382821485301731, -10.365163610619412,
    -10.34750573593709, -10.32984786125477, -10.312189986572449,
    -10.29453211189013, -10.276874237207808, -10.259216362525489,
    -10.24155848784317, -10.223900613160849, -10.20624273847853,
    -10.188584863796208, -10.17092698911389, -10.153269114431568,
    -10.135611239749249, -10.117953365066928, -10.100295490384608,
    -10.082637615702286, -10.064979741019966, -10.047321866337645,
    -10.029663991655326, -10.012006116973005, -9.994348242290686,
    -9.976690367608365, -9.959032492926045, -9.941374618243726,
    -9.923716743561405, -9.906058868879082, -9.888400994196763,
    -9.870743119514442, -9.853085244832123, -9.835427370149803,
    -9.817769495467482, -9.800111620785163, -9.782453746102842,
    -9.764795871420523, -9.747137996738202, -9.729480122055882,
    -9.711822247373561, -9.694164372691242, -9.676506498008921,
    -9.6588486233266, -9.641190748644279, -9.62353287396196,
    -9.605874999279639, -9.58821712459732, -9.570559249914998,
    -9.552901375232679, -9.53524350055036, -9.517585625868039,
    -9.49992775118572, -9.482269876503398, -9.464612001821076,
    -9.446954127138756, -9.429296252456437, -9.411638377774116,
    -9.393980503091797, -9.376322628409476, -9.358664753727156,
    -9.341006879044835, -9.323349004362516, -9.305691129680195,
    -9.288033254997876, -9.270375380315555, -9.252717505633235,
    -9.235059630950913, -9.217401756268593, -9.199743881586272,
    -9.182086006903953, -9.164428132221632, -9.146770257539313,
    -9.129112382856993, -9.111454508174672, -9.093796633492353,
    -9.076138758810032, -9.058480884127711, -9.040823009445392,
    -9.02316513476307, -9.00550726008075, -8.98784938539843,
    -8.97019151071611, -8.95253363603379, -8.934875761351469,
    -8.91721788666915, -8.899560011986829, -8.88190213730451,
    -8.864244262622188, -8.846586387939867, -8.828928513257548,
    -8.811270638575229, -8.793612763892906, -8.775954889210587,
    -8.758297014528265, -8.740639139845946, -8.722981265163627,
    -8.705323390481306, -8.687665515798987, -8.670007641116666,
    -8.652349766434346, -8.634691891752025, -8.617034017069704,
    -8.599376142387385, -8.581718267705064, -8.564060393022743,
    -8.546402518340424, -8.528744643658102, -8.511086768975783,
    -8.493428894293462, -8.475771019611143, -8.458113144928822,
    -8.440455270246503, -8.422797395564183, -8.40513952088186,
    -8.387481646199541, -8.369823771517222, -8.352165896834899,
    -8.33450802215258, -8.31685014747026, -8.29919227278794,
    -8.28153439810562, -8.2638765234233, -8.24621864874098,
    -8.228560774058659, -8.21090289937634, -8.193245024694018,
    -8.175587150011697, -8.157929275329378, -8.140271400647057,
    -8.122613525964736, -8.104955651282417, -8.087297776600096,
    -8.069639901917776, -8.051982027235455, -8.034324152553136,
    -8.016666277870817, -7.999008403188496, -7.981350528506175,
    -7.963692653823855, -7.946034779141534, -7.928376904459213,
    -7.910719029776893, -7.893061155094573, -7.875403280412253,
    -7.857745405729933, -7.840087531047613, -7.822429656365293,
    -7.804771781682973, -7.787113907000653, -7.769456032318332,
    -7.751798157636012, -7.734140282953692, -7.7164824082713706,
    -7.69882453358905, -7.68116665890673, -7.66350878422441,
    -7.64585090954209, -7.62819303485977, -7.61053516017745,
    -7.592877285495129, -7.575219410812809, -7.557561536130488,
    -7.539903661448168, -7.522245786765848, -7.504587912083528,
    -7.486930037401207, -7.4692721627188865, -7.451614288036566,
    -7.433956413354247, -7.416298538671927, -7.398640663989607,
    -7.380982789307287, -7.363324914624966, -7.345667039942646,
    -7.328009165260325, -7.310351290578005, -7.292693415895685,
    -7.275035541213364, -7.257377666531044, -7.2397197918487235,
    -7.222061917166403, -7.204404042484083, -7.186746167801763,
    -7.169088293119443, -7.151430418437123, -7.1337725437548025,
    -7.1161146690724815, -7.098456794390161, -7.080798919707842,
    -7.06314104502552, -7.0454831703432, -7.02782529566088,
    -7.0101674209785605, -6.99250954629624, -6.97485167161392,
    -6.9571937969316, -6.93953592224928, -6.92187804756696,
    -6.904220172884639, -6.8865622982023185, -6.868904423519998,
    -6.851246548837678, -6.833588674155358, -6.815930799473037,
    -6.798272924790717, -6.780615050108397, -6.762957175426076,
    -6.745299300743756, -6.727641426061437, -6.709983551379115,
    -6.692325676696796, -6.674667802014476, -6.6570099273321555,
    -6.639352052649835, -6.621694177967515, -6.604036303285194,
    -6.586378428602874, -6.568720553920554, -6.551062679238234,
    -6.533404804555913, -6.515746929873593, -6.498089055191272,
    -6.480431180508952, -6.462773305826632, -6.445115431144312,
    -6.427457556461992, -6.409799681779671, -6.39214180709735,
    -6.37448393241503, -6.35682605773271, -6.33916818305039,
    -6.321510308368071, -6.30385243368575, -6.2861945590034285,
    -6.268536684321109, -6.250878809638789, -6.233220934956469,
    -6.215563060274149, -6.197905185591829, -6.1802473109095075,
    -6.162589436227187, -6.144931561544867, -6.127273686862547,
    -6.109615812180227, -6.091957937497907, -6.074300062815586,
    -6.0566421881332655, -6.038984313450945, -6.021326438768625,
    -6.003668564086305, -5.986010689403986, -5.968352814721664,
    -5.950694940039344, -5.9330370653570235, -5.915379190674704,
    -5.897721315992384, -5.880063441310064, -5.862405566627744,
    -5.844747691945423, -5.8270898172631025, -5.809431942580782,
    -5.791774067898462, -5.774116193216142, -5.756458318533822,
    -5.738800443851501, -5.721142569169181, -5.7034846944868605,
    -5.68582681980454, -5.66816894512222, -5.6505110704399,
    -5.632853195757579, -5.615195321075259, -5.597537446392939,
    -5.579879571710618, -5.562221697028299, -5.544563822345979,
    -5.526905947663657, -5.509248072981337, -5.491590198299018,
    -5.4739323236166975, -5.456274448934377, -5.438616574252057,
    -5.420958699569736, -5.403300824887416, -5.385642950205096,
    -5.367985075522776, -5.350327200840455, -5.332669326158135,
    -5.315011451475814, -5.297353576793494, -5.279695702111174,
    -5.262037827428854, -5.244379952746534, -5.226722078064213,
    -5.209064203381892, -5.191406328699572, -5.173748454017252,
    -5.156090579334933, -5.138432704652613, -5.120774829970292,
    -5.103116955287971, -5.085459080605651, -5.067801205923331,
    -5.050143331241011, -5.032485456558691, -5.014827581876371,
    -4.9971697071940495, -4.979511832511729, -4.961853957829409,
    -4.944196083147089, -4.926538208464769, -4.908880333782449,
    -4.891222459100128, -4.8735645844178075, -4.855906709735487,
    -4.838248835053167, -4.820590960370848, -4.802933085688527,
    -4.785275211006206, -4.7676173363238865, -4.749959461641566,
    -4.732301586959246, -4.714643712276926, -4.696985837594606,
    -4.679327962912286, -4.661670088229965, -4.6440122135476445,
    -4.626354338865324, -4.608696464183004, -4.591038589500684,
    -4.573380714818364, -4.555722840136043, -4.538064965453723,
    -4.5204070907714025, -4.502749216089082, -4.485091341406762,
    -4.467433466724442, -4.449775592042121, -4.432117717359802,
    -4.414459842677481, -4.39680196799516, -4.379144093312841,
    -4.361486218630521, -4.3438283439482, -4.32617046926588,
    -4.30851259458356, -4.2908547199012395, -4.273196845218919,
    -4.255538970536599, -4.237881095854278, -4.220223221171958,
    -4.202565346489638, -4.184907471807318, -4.167249597124997,
    -4.149591722442677, -4.131933847760356, -4.114275973078036,
    -4.096618098395716, -4.078960223713396, -4.061302349031076,
    -4.043644474348756, -4.025986599666434, -4.008328724984115,
    -3.9906708503017945, -3.9730129756194743, -3.955355100937154,
    -3.9376972262548344, -3.9200393515725134, -3.902381476890193,
    -3.884723602207873, -3.867065727525553, -3.8494078528432327,
    -3.8317499781609126, -3.8140921034785915, -3.7964342287962713,
    -3.778776354113951, -3.761118479431631, -3.7434606047493113,
    -3.725802730066991, -3.70814485538467, -3.69048698070235,
    -3.6728291060200298, -3.6551712313377096, -3.6375133566553894,
    -3.6198554819730693, -3.6021976072907482, -3.584539732608428,
    -3.566881857926108, -3.549223983243788, -3.531566108561468,
    -3.513908233879148, -3.4962503591968277, -3.4785924845145066,
    -3.4609346098321865, -3.4432767351498663, -3.425618860467546,
    -3.407960985785226, -3.3903031111029063, -3.372645236420585,
    -3.3549873617382646, -3.337329487055945, -3.3196716123736247,
    -3.3020137376913046, -3.2843558630089844, -3.2666979883266634,
    -3.249040113644343, -3.231382238962023, -3.213724364279703,
    -3.196066489597383, -3.178408614915063, -3.1607507402327415,
    -3.1430928655504218, -3.1254349908681016, -3.1077771161857815,
    -3.0901192415034613, -3.072461366821141, -3.05480349213882,
    -3.0371456174565, -3.0194877427741798, -3.00182986809186,
    -2.98417199340954, -2.9665141187272197, -2.9488562440448987,
    -2.9311983693625785, -2.9135404946802583, -2.895882619997938,
    -2.878224745315618, -2.860566870633298, -2.842908995950977,
    -2.8252511212686566, -2.807593246586337, -2.7899353719040167,
    -2.7722774972216966, -2.7546196225393764, -2.7369617478570554,
    -2.719303873174735, -2.701645998492415, -2.683988123810095,
    -2.6663302491277747, -2.6486723744454546, -2.6310144997631335,
    -2.6133566250808133, -2.595698750398493, -2.5780408757161735,
    -2.5603830010338533, -2.542725126351533, -2.525067251669212,
    -2.507409376986892, -2.4897515023045718, -2.4720936276222516,
    -2.454435752939932, -2.4367778782576113, -2.4191200035752916,
    -2.40146212889297, -2.3838042542106503, -2.36614637952833,
    -2.34848850484601, -2.33083063016369, -2.3131727554813697,
    -2.2955148807990486, -2.2778570061167285, -2.2601991314344083,
    -2.2425412567520886, -2.2248833820697684, -2.2072255073874483,
    -2.189567632705128, -2.171909758022808, -2.154251883340488,
    -2.136594008658166, -2.1189361339758457, -2.1012782592935255,
    -2.0836203846112054, -2.065962509928885, -2.0483046352465655,
    -2.0306467605642453, -2.012988885881925, -1.995331011199605,
    -1.9776731365172848, -1.9600152618349647, -1.9423573871526447,
    -1.9246995124703226, -1.9070416377880024, -1.8893837631056825,
    -1.8717258884233623, -1.8540680137410421, -1.836410139058722,
    -1.8187522643764018, -1.8010943896940819, -1.7834365150117617,
    -1.7657786403294415, -1.7481207656471214, -1.7304628909648014,
    -1.7128050162824793, -1.6951471416001591, -1.677489266917839,
    -1.659831392235519, -1.6421735175531988, -1.624515642870879,
    -1.6068577681885587, -1.5891998935062386, -1.5715420188239184,
    -1.5538841441415985, -1.5362262694592783, -1.5185683947769582,
    -1.500910520094636, -1.483252645412316, -1.4655947707299959,
    -1.4479368960476757, -1.4302790213653556, -1.4126211466830356,
    -1.3949632720007155, -1.3773053973183953, -1.3596475226360754,
    -1.3419896479537552, -1.324331773271435, -1.3066738985891149,
    -1.289016023906795, -1.2713581492244728, -1.2537002745421526,
    -1.2360423998598324, -1.2183845251775125, -1.2007266504951923,
    -1.1830687758128722, -1.165410901130552, -1.1477530264482319,
    -1.130095151765912, -1.1124372770835917, -1.0947794024012718,
    -1.0771215277189516, -1.0594636530366295, -1.0418057783543093,
    -1.0241479036719894, -1.0064900289896692, -0.988832154307349,
    -0.9711742796250289, -0.953516404942709, -0.9358585302603887,
    -0.9182006555780686, -0.9005427808957486, -0.8828849062134284,
    -0.8652270315311084, -0.8475691568487862, -0.8299112821664661,
    -0.812253407484146, -0.7945955328018259, -0.7769376581195059,
    -0.7592797834371857, -0.7416219087548656, -0.7239640340725455,
    -0.7063061593902255, -0.6886482847079054, -0.6709904100255851,
    -0.6533325353432651, -0.635674660660943, -0.6180167859786229,
    -0.6003589112963027, -0.5827010366139826, -0.5650431619316626,
    -0.5473852872493424, -0.5297274125670224, -0.5120695378847023,
    -0.4944116632023822, -0.47675378852006206, -0.459095913837742,
    -0.4414380391554219, -0.4237801644730997, -0.40612228979077963,
    -0.38846441510845964, -0.3708065404261395, -0.35314866574381937,
    -0.3354907910614993, -0.3178329163791792, -0.300175041696859,
    -0.28251716701453894, -0.2648592923322189, -0.24720141764989875,
    -0.22954354296757862, -0.2118856682852586, -0.19422779360293638,
    -0.17656991892061633, -0.15891204423829625, -0.14125416955597617,
    -0.12359629487365605, -0.10593842019133587, -0.08828054550901582,
    -0.07062267082669567, -0.05296479614437564, -0.035306921462055545,
    -0.017649046779735396, 8.827902584613117e-06, 0.0176667025849068,
    0.035324577267226924, 0.05298245194954707, 0.07064032663186703,
    0.08829820131418714, 0.10595607599650726, 0.12361395067882734,
    0.14127182536114752, 0.15892970004346768, 0.17658757472578768,
    0.19424544940810778, 0.21190332409042784, 0.22956119877275002,
    0.2472190734550702, 0.2648769481373903, 0.2825348228197104,
    0.3001926975020305, 0.3178505721843506, 0.3355084468666707,
    0.35316632154899075, 0.37082419623131085, 0.3884820709136309,
    0.4061399455959511, 0.4237978202782711, 0.4414556949605933,
    0.45911356964291344, 0.47677144432523355, 0.49442931900755355,
    0.5120871936898738, 0.5297450683721937, 0.5474029430545139,
    0.5650608177368339, 0.5827186924191541, 0.6003765671014741,
    0.6180344417837943, 0.6356923164661143, 0.6533501911484365,
    0.6710080658307566, 0.6886659405130767, 0.7063238151953968,
    0.723981689877717, 0.7416395645600371, 0.7592974392423572,
    0.7769553139246773, 0.7946131886069974, 0.8122710632893174,
    0.8299289379716375, 0.8475868126539576, 0.8652446873362797,
    0.8829025620185997, 0.9005604367009199, 0.91821831138324,
    0.9358761860655602, 0.9535340607478803, 0.9711919354302003,
    0.9888498101125205, 1.0065076847948404, 1.0241655594771606,
    1.0418234341594808, 1.0594813088418007, 1.0771391835241209,
    1.094797058206443, 1.1124549328887632, 1.1301128075710833,
    1.1477706822534035, 1.1654285569357234, 1.1830864316180436,
    1.2007443063003638, 1.2184021809826837, 1.2360600556650039,
    1.253717930347324, 1.271375805029644, 1.2890336797119641,
    1.3066915543942863, 1.3243494290766065, 1.3420073037589266,
    1.3596651784412466, 1.3773230531235667, 1.3949809278058867,
    1.4126388024882068, 1.430296677170527, 1.4479545518528472,
    1.4656124265351673, 1.4832703012174873, 1.5009281758998074,
    1.5185860505821296, 1.5362439252644498, 1.5539017999467697,
    1.5715596746290899, 1.58921754931141, 1.60687542399373,
    1.6245332986760501, 1.6421911733583703, 1.6598490480406904,
    1.6775069227230104, 1.6951647974053305, 1.7128226720876507,
    1.7304805467699729, 1.7481384214522928, 1.765796296134613,
    1.7834541708169331, 1.8011120454992533, 1.8187699201815732,
    1.8364277948638934, 1.8540856695462133, 1.8717435442285335,
    1.8894014189108537, 1.9070592935931738, 1.9247171682754938,
    1.942375042957816, 1.960032917640136, 1.9776907923224563,
    1.9953486670047764, 2.0130065416870964, 2.0306644163694165,
    2.0483222910517367, 2.065980165734057, 2.0836380404163766,
    2.101295915098697, 2.118953789781017, 2.136611664463337,
    2.154269539145657, 2.171927413827979, 2.1895852885102998,
    2.2072431631926195, 2.2249010378749396, 2.24255891255726,
    2.26021678723958, 2.2778746619218997, 2.2955325366042203,
    2.3131904112865405, 2.33084828596886, 2.3485061606511803,
    2.3661640353335005, 2.3838219100158224, 2.4014797846981426,
    2.4191376593804628, 2.436795534062783, 2.454453408745103,
    2.4721112834274233, 2.489769158109743, 2.507427032792063,
    2.5250849074743833, 2.5427427821567035, 2.5604006568390236,
    2.578058531521344, 2.5957164062036657, 2.613374280885986,
    2.631032155568306, 2.648690030250626, 2.6663479049329464,
    2.6840057796152665, 2.7016636542975867, 2.7193215289799064,
    2.7369794036622266, 2.7546372783445467, 2.772295153026867,
    2.789953027709187, 2.807610902391509, 2.825268777073829,
    2.8429266517561493, 2.8605845264384695, 2.8782424011207897,
    2.8959002758031094, 2.9135581504854295, 2.9312160251677497,
    2.94887389985007, 2.96653177453239, 2.98418964921471,
    3.0018475238970304, 3.0195053985793523, 3.0371632732616725,
    3.0548211479439926, 3.072479022626313, 3.0901368973086325,
    3.1077947719909527, 3.125452646673273, 3.143110521355593,
    3.160768396037913, 3.1784262707202333, 3.1960841454025535,
    3.2137420200848736, 3.2313998947671934, 3.2490577694495157,
    3.266715644131836, 3.284373518814156, 3.302031393496476,
    3.319689268178796, 3.337347142861116, 3.3550050175434363,
    3.3726628922257564, 3.3903207669080766, 3.4079786415903968,
    3.4256365162727165, 3.4432943909550366, 3.460952265637359,
    3.478610140319679, 3.496268015001999, 3.513925889684319,
    3.5315837643666392, 3.5492416390489594, 3.5668995137312796,
    3.5845573884135997, 3.6022152630959194, 3.6198731377782396,
    3.6375310124605598, 3.65518888714288, 3.6728467618252023,
    3.690504636507522, 3.708162511189842, 3.7258203858721624,
    3.7434782605544825, 3.7611361352368027, 3.778794009919123,
    3.7964518846014426, 3.814109759283763, 3.831767633966083,
    3.849425508648403, 3.867083383330723, 3.8847412580130456,
    3.9023991326953653, 3.9200570073776855, 3.9377148820600056,
    3.955372756742326, 3.973030631424646, 3.990688506106966,
    4.008346380789286, 4.026004255471606, 4.043662130153926,
    4.061320004836246, 4.0789778795185665, 4.096635754200888,
    4.114293628883209, 4.131951503565529, 4.149609378247849,
    4.167267252930169, 4.184925127612489, 4.202583002294809,
    4.22024087697713, 4.23789875165945, 4.25555662634177,
    4.273214501024089, 4.290872375706409, 4.308530250388732,
    4.326188125071052, 4.343845999753372, 4.361503874435692,
    4.379161749118012, 4.396819623800332, 4.414477498482652,
    4.432135373164972, 4.449793247847293, 4.467451122529613,
    4.485108997211933, 4.502766871894253, 4.520424746576573,
    4.538082621258895, 4.555740495941215, 4.5733983706235355,
    4.591056245305856, 4.608714119988176, 4.626371994670496,
    4.644029869352816, 4.661687744035135, 4.679345618717456,
    4.697003493399776, 4.714661368082096, 4.732319242764416,
    4.749977117446739, 4.767634992129058, 4.785292866811378,
    4.8029507414936985, 4.820608616176019, 4.838266490858339,
    4.855924365540659, 4.873582240222979, 4.891240114905299,
    4.9088979895876195, 4.92655586426994, 4.94421373895226,
    4.961871613634582, 4.979529488316902, 4.997187362999222,
    5.014845237681542, 5.032503112363862, 5.0501609870461825,
    5.067818861728502, 5.085476736410822, 5.103134611093142,
    5.120792485775462, 5.1384503604577825, 5.156108235140103,
    5.173766109822425, 5.191423984504745, 5.209081859187065,
    5.226739733869385, 5.244397608551705, 5.262055483234025,
    5.2797133579163456, 5.297371232598666, 5.315029107280986,
    5.332686981963306, 5.350344856645626, 5.368002731327946,
    5.385660606010268, 5.4033184806925885, 5.420976355374909,
    5.438634230057229, 5.456292104739548, 5.473949979421868,
    5.491607854104188, 5.5092657287865086, 5.526923603468829,
    5.544581478151149, 5.562239352833469, 5.579897227515789,
    5.597555102198109, 5.615212976880431, 5.6328708515627515,
    5.650528726245072, 5.668186600927392, 5.685844475609712,
    5.703502350292032, 5.721160224974352, 5.7388180996566724,
    5.756475974338993, 5.774133849021312, 5.791791723703633,
    5.809449598385952, 5.827107473068275, 5.844765347750594,
    5.8624232224329145, 5.880081097115235, 5.897738971797555,
    5.915396846479875, 5.933054721162195, 5.950712595844515,
    5.9683704705268354, 5.986028345209156, 6.003686219891476,
    6.021344094573796, 6.039001969256118, 6.056659843938438,
    6.074317718620758, 6.091975593303078, 6.1096334679853985,
    6.127291342667719, 6.144949217350039, 6.162607092032359,
    6.180264966714679, 6.1979228413969985, 6.215580716079319,
    6.233238590761639, 6.250896465443962, 6.268554340126281,
    6.286212214808601, 6.303870089490921, 6.321527964173241,
    6.3391858388555615, 6.356843713537882, 6.374501588220202,
    6.392159462902522, 6.409817337584842, 6.427475212267162,
    6.4451330869494825, 6.462790961631804, 6.480448836314125,
    6.498106710996445, 6.515764585678765, 6.533422460361085,
    6.551080335043405,
];

/// Second derivatives of the spline at each knot (zero at both ends).
pub static INV_BESSEL_SECOND_DERIV: [f64; INV_BESSEL_KNOTS] = [
    0.0, -49227625806.98182, -34445486840.49881,
    -36722458295.39758, -34526053813.14616, -33572927664.453453,
    -32342923223.060387, -31237916675.099556, -30149391192.9451,
    -29104443076.76526, -28094212050.27487, -27119444987.518444,
    -26178393019.562553, -25270023897.55423, -24393166991.483707,
    -23546738552.414318, -22729680152.831898, -21940973353.100834,
    -21179634187.986473, -20444713063.5727, -19735293277.87687,
    -19050489950.20926, -18389448905.259605, -17751345603.18165,
    -17135384120.096706, -16540796144.975533, -15966840031.339815,
    -15412799864.79867, -14877984572.92014, -14361727064.761713,
    -13863383394.601036, -13382331963.817982, -12917972740.368513,
    -12469726515.615871, -12037034176.359556, -11619356013.338629,
    -11216171041.194336, -10826976357.117746, -10451286503.264948,
    -10088632872.694181, -9738563113.35417, -9400640574.321247,
    -9074443752.161127, -8759565772.99919, -8455613877.892845,
    -8162208939.346227, -7878984982.912103, -7605588735.284716,
    -7341679180.052189, -7086927134.522791, -6841014838.728475,
    -6603635557.895338, -6374493201.845785, -6153301953.482677,
    -5939785914.570828, -5733678759.165906, -5534723403.638849,
    -5342671684.398757, -5157284049.631701, -4978329258.851385,
    -4805584096.702015, -4638833092.034855, -4477868251.675867,
    -4322488798.308428, -4172500923.0030293, -4027717540.4472814,
    -3887958058.1298027, -3753048149.42427, -3622819536.9895043,
    -3497109782.461647, -3375762084.2608523, -3258625081.218671,
    -3145552664.8941517, -3036403796.503115, -2931042330.8250403,
    -2829336847.6975355, -2731160486.0729856, -2636390788.015873,
    -2544909543.6934752, -2456602646.1879244, -2371359947.055605,
    -2289075120.7080927, -2209645530.3638783, -2132972101.292429,
    -2058959195.9495983, -1987514496.0012412, -1918548885.9366665,
    -1851976342.9810581, -1787713828.9087033, -1725681187.132705,
    -1665801042.368886, -1607998704.2036495, -1552202073.8776217,
    -1498341554.613692, -1446349964.3108559, -1396162452.3338134,
    -1347716418.1947763, -1300951433.489059, -1255809166.960429,
    -1212233311.030949, -1170169512.3111372, -1129565303.15972,
    -1090370036.7751362, -1052534823.5188531, -1016012470.4901394,
    -980757422.0209651, -946725703.5355966, -913874866.0486844,
    -882163933.7812047, -851553352.573551, -822004940.989181,
    -793481842.2500434, -765948478.6362069, -739370506.944059,
    -713714775.5268068, -688949283.2921951, -665043139.3587334,
    -641966524.8815594, -619690655.656752, -598187746.2902238,
    -577430975.4975271, -557394452.7292264, -538053185.7637416,
    -519383049.6579081, -501360756.5137058, -483963826.6053088,
    -467170560.1255208, -450960010.37926346, -435311957.33571714,
    -420206882.7810766, -405625945.5908093, -391550958.56090015,
    -377964365.4645126, -364849219.3603226, -352189161.2584133,
    -339968399.9055656, -328171691.94638115, -316784322.9578186,
    -305792089.1355089, -295181279.5005633, -284938658.8504934,
    -275051451.2634396, -265507324.0782891, -256294372.6238575,
    -247401105.28999025, -238816429.20781568, -230529636.46247867,
    -222530390.6438269, -214808714.0745274, -207354975.220819,
    -200159876.8340641, -193214444.21639147, -186510014.1179961,
    -180038223.88467842, -173791001.06090987, -167760553.26280618,
    -161939358.54757798, -156320155.93252933, -150895936.41920608,
    -145659934.20754623, -140605618.25408956, -135726684.1653104,
    -131017046.2772379, -126470830.11918044, -122082365.04668127,
    -117846177.18593319, -113756982.61170867, -109809680.73572597,
    -105999347.96243863, -102321231.55011052, -98770743.65656675,
    -95343455.65680546, -92035092.57294334, -88841527.79301025,
    -85758777.86758061, -82782997.59511723, -79910475.18789506,
    -77137627.65322658, -74460996.33377431, -71877242.58568776,
    -69383143.6014754, -66975588.42032632, -64651574.02033696,
    -62408201.58085543, -60242672.87774334, -58152286.77250534,
    -56134435.86548501, -54186603.22261583, -52306359.252917975,
    -50491358.668511115, -48739337.55900677, -47048110.5752213,
    -45415568.19598031, -43839674.09626748, -42318462.61865725,
    -40850036.30099076, -39432563.53517024, -38064276.25693495,
    -36743467.76133307, -35468490.56115536, -34237754.33615479,
    -33049723.95015558, -31902917.536261536, -30795904.644163173,
    -29727304.464045595, -28695784.09448655, -27700056.889371306,
    -26738880.84539654, -25811057.057191197, -24915428.22100219,
    -24050877.190403327, -23216325.58334981, -22410732.436976567,
    -21633092.909694865, -20882437.02672274, -20157828.47112021,
    -19458363.41589763, -18783169.395361118, -18131404.219789345,
    -17502254.92030879, -16894936.739941258, -16308692.15123031,
    -15742789.912513647, -15196524.156260125, -14669213.507139724,
    -14160200.234775571, -13668849.429902237, -13194548.21560918,
    -12736704.980555665, -12294748.642397359, -11868127.935273966,
    -11456310.720982336, -11058783.327525176, -10675049.905779853,
    -10304631.813219829, -9947067.015362225, -9601909.510374501,
    -9268728.772400873, -8947109.214300761, -8636649.670021875,
    -8336962.893233668, -8047675.075491279, -7768425.378360835,
    -7498865.485408652, -7238659.165496543, -6987481.855419494,
    -6745020.253412684, -6510971.9296561, -6285044.948087621,
    -6066957.502857159, -5856437.56659115, -5653222.550944659,
    -5457058.979608851, -5267702.171289189, -5084915.935426882,
    -4908472.276612947, -4738151.111567959, -4573739.992819061,
    -4415033.84534644, -4261834.710048303, -4113951.496453237,
    -3971199.7455147165, -3833401.398100634, -3700384.5741321333,
    -3571983.3575187344, -3448037.5891806376, -3328392.66779634,
    -3212899.3563710256, -3101413.5963618043, -2993796.3282331703,
    -2889913.317328092, -2789634.98713228, -2692836.2574757296,
    -2599396.3878761367, -2509198.8281630427, -2422131.071811359,
    -2338084.5165983774, -2256954.3284784243, -2178639.3112350316,
    -2103041.780047615, -2030067.43974028, -1959625.2670398054,
    -1891627.3972551865, -1825989.0144257334, -1762628.2457319908,
    -1701466.059298073, -1642426.1655211383, -1585434.9221419983,
    -1530421.2421038859, -1477316.505150323, -1426054.4720102889,
    -1376571.2019562384, -1328804.9728829549, -1282696.204543189,
    -1238187.3838915657, -1195222.9937431223, -1153749.443266003,
    -1113715.001041552, -1075069.7310430335, -1037765.4296198671,
    -1001755.5660343191, -966995.2239970767, -933441.0458367878,
    -901051.1783604391, -869785.2206729173, -839604.1737179067,
    -810470.3917444884, -782347.5352498672, -755200.5257011331,
    -728995.5017731603, -703699.7771109131, -679281.7995261498,
    -655711.1117548011, -632958.3132576698, -610995.0238130033,
    -589793.8478588939, -569328.3405401115, -549572.9745326949,
    -530503.1083825685, -512094.9556067678, -494325.55515709275,
    -477172.7426807347, -460615.1229285213, -444632.04306472966,
    -429203.5668819373, -414310.44994039857, -399934.1156035711,
    -386056.63179340994, -372660.6886886792, -359729.57711692224,
    -347247.16766449215, -335197.89065574424, -323566.7166220869,
    -312339.1376379664, -301501.1491921084, -291039.23270737805,
    -280940.3387167679, -271191.8705248432, -261781.66858824185,
    -252697.9952395176, -243929.52013392153, -235465.30606876174,
    -227294.79536867607, -219407.79668713053, -211794.47232714418,
    -204445.32594113908, -197351.19071112177, -190503.21789041514,
    -183892.86579163827, -177511.88910846526, -171352.32864455436,
    -165406.5013875608, -159666.99091741876, -154126.6381598472,
    -148778.5324551223, -143616.0029449049, -138632.61023810253,
    -133822.13839245826, -129178.58715417015, -124696.16447256641,
    -120369.27928088391, -116192.53451483221, -112160.7203928623,
    -108268.80790193954, -104511.94253313643, -100885.43823549415,
    -97384.77154972442, -94005.57598505486, -90743.6365623134,
    -87594.88456293636, -84555.39244534133, -81621.36895767273,
    -78789.15439631425, -76055.2160529876, -73416.14379546768,
    -70868.64582994275, -68409.54457697232, -66035.77272325408,
    -63744.36938927343, -61532.47643056612, -59397.33488729219,
    -57336.281527274696, -55346.745531847744, -53426.24529324405,
    -51572.38530684678, -49782.85319656676, -48055.41682076879,
    -46387.92149330881, -44778.28729549461, -43224.506477336756,
    -41724.640960972516, -40276.81991414707, -38879.23742562393,
    -37530.15024534215, -36227.87561359572, -34970.789163481626,
    -33757.32288871441, -32585.963196582044, -31455.24901157472,
    -30363.76995793519, -29310.164600309014, -28293.11874101608,
    -27311.363789455412, -26363.675168588936, -25448.870798172655,
    -24565.809612674584, -23713.39014225896, -22890.549137018083,
    -22096.26024072653, -21329.532712549204, -20589.410187556514,
    -19874.969488844472, -19185.319470341637, -18519.599911260528,
    -17876.98043690529, -17256.65948855244, -16657.863319908185,
    -16079.845033351543, -15521.883648545394, -14983.283202201965,
    -14463.371881119678, -13961.501183383229, -13477.04510954886,
    -13009.399382053978, -12557.980692366515, -12122.22597002314,
    -11701.591686084668, -11295.55316858595, -10903.603953855778,
    -10525.25515035277, -10160.034832123856, -9807.487447952408,
    -9467.173254631285, -9138.667767019075, -8821.561230029509,
    -8515.458106688684, -8219.976584501817, -7934.748100332018,
    -7659.4168794386, -7393.639492483858, -7137.084426811178,
    -6889.431673321253, -6650.372326630924, -6419.608200619858,
    -6196.851455638842, -5981.824240447426, -5774.258344303992,
    -5573.8948642243, -5380.48387990928, -5193.784144190862,
    -5013.562780111834, -4839.594992196354, -4671.663784704984,
    -4509.559691727073, -4353.080515712329, -4202.03107516524,
    -4056.222961371436, -3915.474303191678, -3779.609540350782,
    -3648.4592045232675, -3521.859707461272, -3399.6531379141047,
    -3281.68706349645, -3167.8143415133895, -3057.892934828374,
    -2951.7857349891456, -2849.3603911625705, -2750.4891448726,
    -2655.0486709397264, -2562.919923440632, -2473.987987184072,
    -2388.1419345872755, -2305.2746871418667, -2225.2828819229326,
    -2148.06674249724, -2073.5299548864805, -2001.5795468291722,
    -1932.125772404798, -1865.081999650782, -1800.364602754504,
    -1737.8928576689425, -1677.5888413722844, -1619.3773347668232,
    -1563.1857287722821, -1508.9439338415818, -1456.5842924167457,
    -1406.041494706448, -1357.252497006684, -1310.1564433119913,
    -1264.6945891831238, -1220.8102286042279, -1178.4486232319605,
    -1137.5569340710344, -1098.0841556445398, -1059.9810522502453,
    -1023.2000967505999, -987.6954110054475, -953.4227089637473,
    -920.3392411371808, -888.4037415167013, -857.5763758886915,
    -827.8186923172748, -799.0935731325026, -771.3651884950318,
    -744.5989520073355, -718.7614772142656, -693.8205362440594,
    -669.7450194575208, -646.5048967115142, -624.0711798280172,
    -602.4158865537747, -581.5120055159571, -561.3334626710296,
    -541.8550886426925, -523.0525874692512, -504.90250615437253,
    -487.3822055543203, -470.46983200977445, -454.1442901998466,
    -438.38521672785294, -423.17295482416046, -408.4885297211447,
    -394.3136250749616, -380.6305600774033, -367.42226738063124,
    -354.67227188044575, -342.36467006924835, -330.4841102990172,
    -319.0157735468496, -307.9453549917618, -297.25904613295586,
    -286.9435175946915, -276.9859024750036, -267.3737803135955,
    -258.0951615926866, -249.13847278671005, -240.4925419118922,
    -232.14658461568246, -224.09019069893742, -216.3133111513173,
    -208.80624560234457, -201.55963023693246, -194.56442608692453,
    -187.811907804449, -181.29365272182798, -175.00153039254275,
    -168.92769241955529, -163.0645626837743, -157.40482788567638,
    -151.941428415188, -146.66754957398598, -141.5766130353938,
    -136.6622686715856, -131.91838661876804, -127.33904963219976,
    -122.91854570090621, -118.65136093856043, -114.53217268215799,
    -110.55584287154, -106.71741163516829, -103.01209109481609,
    -99.43525940669447, -95.98245498375461, -92.64937094094358,
    -89.43184971103392, -86.32587786958675, -83.3275811214566,
    -80.43321946810818, -77.63918254477377, -74.94198511554534,
    -72.3382627205381, -69.82476749195449, -67.39836407869268,
    -65.05602576413116, -62.79483066337345, -60.61195809226084,
    -58.50468504675286, -56.47038279879147, -54.5065136235595,
    -52.61062762581799, -50.780359688839816, -49.01342652082362,
    -47.307623798932, -45.66082342850551, -44.07097087939661,
    -42.53608262235804, -41.054243654312586, -39.62360510512098,
    -38.24238193051691, -36.90885068200534, -35.62134735362434,
    -34.37826530355595, -33.1780532459158, -32.0192133144929,
    -30.900299184721277, -29.819914272130845, -28.776709980562575,
    -27.76938401612783, -26.796678758465674, -25.857379685625062,
    -24.950313851111304, -24.074348417233573, -23.228389231112505,
    -22.41137945488622, -21.62229823769276, -20.860159432550063,
    -20.124010358058655, -19.412930598500257, -18.726030843676348,
    -18.06245176957718, -17.421362950503458, -16.80196181212702,
    -16.203472611669365, -15.625145457704654, -15.066255353664829,
    -14.526101276515542, -14.00400528179348, -13.499311635020687,
    -13.011385970653158, -12.539614475658704, -12.083403095492528,
    -11.642176764833927, -11.215378657141162, -10.802469456632261,
    -10.40292664940643, -10.016243829578649, -9.641930028609217,
    -9.279509053003526, -8.928518844364351, -8.58851084689234,
    -8.25904939245527, -7.939711094814798, -7.630084254647089,
    -7.329768274942419, -7.038373084348925, -6.755518567381546,
    -6.480834000955126, -6.213957496528139, -5.95453544463103,
    -5.702221962724796, -5.456678344609159, -5.217572507894925,
    -4.984578442561954, -4.7573756544882855, -4.535648605486145,
    -4.319086147530154, -4.107380949578147, -3.9002289147247744,
    -3.697328587354749, -3.4983805476339382, -3.3030867907576766,
    -3.1111500917583763, -2.9222733496869986, -2.7361589138512894,
    -2.552507885663447, -2.371019397006947, -2.191389861254728,
    -2.0133121947957777, -1.8364750067419333, -1.6605617549123064,
    -1.4852498644411218, -1.3102098069916925, -1.1351041384051521,
    -0.9595864915365367, -0.7833005215003477, -0.6058788024389643,
    -0.4269416706229501, -0.24609601452686128, -0.06293400808119688,
    0.12296821480035527, 0.31205194489870786, 0.5047773430118158,
    0.701624947779613, 0.9030972434149422, 1.1097202898434786,
    1.322045410054206, 1.5406509358556792, 1.7661440049177202,
    1.9991624057434323, 2.240376464477431, 2.4904909622924882,
    2.750247076806801, 3.0204243313074493, 3.3018425391783226,
    3.5953637242901992, 3.9018939974660887, 4.222385364527453,
    4.557837438922369, 4.909299029432541, 5.277869565468557,
    5.664700325242263, 6.070995425638101, 6.498012521885528,
    6.947063181886081, 7.419512868161114, 7.916780489564851,
    8.44033745776106, 8.991706200025074, 9.572458073162384,
    10.184210628451234, 10.82862418334683, 11.507397659395046,
    12.222263661284286, 12.974982774097631, 13.767337085946957,
    14.601122944360942, 15.478142988487221, 16.400197523886927,
    17.369075317326796, 18.386543944776705, 19.45433983500775,
    20.57415818824056, 21.747642993629213, 22.976377381725115,
    24.26187458645916, 25.605569814922536, 27.008813335616033,
    28.47286509985664, 29.998891241165964, 31.587962721591012,
    33.24105646740492, 34.95905918423706, 36.74277411204665,
    38.59293081583302, 40.510198102238256, 42.49520004673414,
    44.548535013327886, 46.67079748512067, 48.86260240630635,
    51.124611635819484, 53.45756210109328, 55.86229504092791,
    58.339785839625186, 60.89117374067868, 63.51779089377247,
    66.22119002998126, 69.00317026016012, 71.86580033623335,
    74.81143910366846, 77.84275252960633, 80.96272730427484,
    84.17468060372376, 87.4822662597852, 90.88947707854577,
    94.40064388602482, 98.02043119482619, 101.75383019903433,
    105.60614932974927, 109.58300289766814, 113.69029849725621,
    117.93422341589104, 122.3212309383214, 126.85802676058944,
    131.55155611396995, 136.4089920387686, 141.43772526128723,
    146.64535557107732, 152.03968569149214, 157.62871700295472,
    163.4206477678658, 169.42387383454277, 175.6469915446058,
    182.0988030764865, 188.78832402420255, 195.72479303930004,
    202.91768339244905, 210.37671633058642, 218.1118760438772,
    226.13342559820586, 234.45192485808417, 243.07824848155323,
    252.02360511982982, 261.29955757069627, 270.91804279065667,
    280.89139279918777, 291.2323557192533, 301.95411694214204,
    313.0703206529569, 324.5950913848379, 336.54305586557393,
    348.9293645600897, 361.7697142742776, 375.08036997832676,
    388.87818757132203, 403.180636809081, 418.0058244255192,
    433.37251807760003, 449.3001704684307, 465.8089442154353,
    482.9197377635801, 500.6542109586792, 519.034813148257,
    538.0848102058028, 557.8283144217987, 578.2903134725794,
    599.496702478586, 621.4743151075487, 644.2509577810456,
    667.8554436403206, 692.3176281270028, 717.6684472841805,
    743.9399543755336, 771.165361544672, 799.3790801124678,
    828.6167637189724, 858.9153530006856, 890.313121362894,
    922.8497231287984, 956.5662421909168, 991.5052448686365,
    1027.7108310499018, 1065.2286914107676, 1104.1061625822592,
    1144.3922878459557, 1186.1378773404408, 1229.3955722971696,
    1274.2199102099796, 1320.6673939036975, 1368.7965608456223,
    1418.6680578389282, 1470.344715640553, 1523.8916278803265,
    1579.376233506269, 1636.8683974500389, 1696.4405049320726,
    1758.1675427841424, 1822.1272020993788, 1888.3999681080882,
    1957.0692267072238, 2028.2213627833562, 2101.945875102195,
    2178.3354806075904, 2257.4862365871986, 2339.4976573944173,
    2424.4728397293634, 2512.518590720153, 2603.7455632157425,
    2698.2683918570633, 2796.205838433269, 2897.680938048738,
    3002.8211546893317, 3111.758539493584, 3224.6298973188486,
    3341.5769532867143, 3462.746538880129, 3588.2907591635562,
    3718.3672082510548, 3853.1391340934433, 3992.775674457801,
    4137.4520416431005, 4287.349761490777, 4442.656883635838,
    4603.568232884529, 4770.285637047969, 4943.018186219575,
    5121.982501145596, 5307.402984988352, 5499.512125323643,
    5698.550769048879, 5904.768424332884, 6118.423587230156,
    6339.784041425557, 6569.127213280427, 6806.74050457545,
    7052.921657812055, 7307.979128113111, 7572.23246605476,
    7846.012715350844, 8129.66283308954, 8423.538108028519,
    8728.006615326842, 9043.449660608734, 9370.262287721733,
    9708.853710139922, 10059.647911003407, 10423.084083897755,
    10799.617238231222, 11189.718750979611, 11593.876940717319,
    12012.597707841034, 12446.405135610898, 12895.842164451886,
    13361.471248347441, 13843.87510835173, 14343.657370761603,
    14861.443408581496, 15397.88109835322, 15953.641552182296,
    16529.420122289033, 17125.937052311772, 17743.938599966932,
    18384.197760404266, 19047.515420613337, 19734.7212100245,
    20446.674584211843, 21184.266001813117, 21948.417797211485,
    22740.085620995334, 23560.25938149952, 24409.964667293796,
    25290.263848515337, 26202.257651347114, 27147.086215832893,
    28125.930806068758, 29140.01510073425, 30190.606811421407,
    31279.01925019909, 32406.612879500426, 33574.79718880585,
    34785.03229618869, 36038.830800005744, 37337.75973222214,
    38683.44248540817, 40077.560747253025, 41521.85683433536,
    43018.1354690203, 44568.26655065728, 46174.186936926475,
    47837.90340828417, 49561.49464376905, 51347.11427860676,
    53196.9932233391, 55113.44273463748, 57098.85704309884,
    59155.71662968103, 61286.59098626899, 63494.14214456691,
    65781.12772108187, 68150.40467322111, 70604.93247239474,
    73147.77697370858, 75782.11468797861, 78511.23569792454,
    81338.54901875713, 84267.58569973415, 87302.00393828536,
    90445.59395938645, 93702.28111753584, 97076.13309630449,
    100571.363292744, 104192.33635121587, 107943.57420913316,
    111829.7617274533, 115855.7508755582, 120026.56989426367,
    124347.42622040596, 128823.71557829318, 133461.02702061145,
    138265.15087869173, 143242.0856951769, 148398.0453752919,
    153739.46744258486, 159273.02134027303, 165005.61479484526,
    170944.4059064556, 177096.80873890262, 183470.50363885122,
    190073.44938221094, 196913.88698912787, 204000.35793421697,
    211341.70789519424, 218947.1013680595, 226826.03294135205,
    234988.33840210483, 243444.20499466173, 252204.1907586832,
    261279.22824867658, 270680.6468740029, 280420.1804009084,
    290509.98822630866, 300962.66206427274, 311791.2498420032,
    323009.2686615749, 334630.71801307244, 346670.106065496,
    359142.4569249509, 372063.33915082616, 385448.87898435513,
    399315.7825353247, 413681.35765364225, 428563.5319385498,
    443980.8813785608, 459952.6444943235, 476498.7579678389,
    493639.8678049167, 511397.3700695541, 529793.4226389509,
    548850.9854212475, 568593.8415512682, 589046.6280322294,
    610234.868694627, 632185.0100447278, 654924.4331024815,
    678481.5304316574, 702885.6835232504, 728167.3564607383,
    754358.0935290015, 781490.5796517013, 809598.6695117778,
    838717.4397423237, 868883.2299676121, 900133.6727672577,
    932507.7742381552, 966045.9228310289, 1000789.9710643429,
    1036783.2768804774, 1074070.7437805044, 1112698.905185737,
    1152715.9622434697, 1194171.8230878816, 1237118.3297068009,
    1281608.5911259092, 1327699.9611019003, 1375443.01247915,
    1424923.4142622463, 1476104.6456747253, 1529420.563026641,
    1583544.4977827803, 1643789.8311785543, 1690479.337360008,
    1798045.740007243, 1686577.996826768, 2410402.9742645803,
    0.0,
];
